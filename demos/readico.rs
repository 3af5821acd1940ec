use icodir::IconDir;
use std::env;
use std::fs::File;
use std::io::BufReader;

fn main() {
    env_logger::init();
    if env::args().count() != 2 {
        println!("Usage: readico <path>");
        return;
    }
    let path = env::args().nth(1).unwrap();
    let file = File::open(path).expect("failed to open file");
    let buffered = BufReader::new(file);
    let icondir = IconDir::read(buffered).expect("failed to read ICO file");
    println!("ICO file contains {} image(s).", icondir.entries().len());
    for (index, entry) in icondir.entries().iter().enumerate() {
        println!("Image {}: {}x{} ({} byte payload)",
                 index,
                 entry.width(),
                 entry.height(),
                 entry.data().len());
    }
}
