//! Assembles an ICO file from one or more PNG files that have already been
//! rasterized at their target sizes.
//!
//! ```shell
//! cargo run --example png2ico <path/to/icon.ico> <16.png> [<32.png> ...]
//! ```
//!
//! The dimensions of each image are read from its PNG header; each must be
//! no larger than 256x256.  Images are packed in the order given.

use icodir::{IconDir, IconSource};
use std::env;

fn main() {
    env_logger::init();
    if env::args().count() < 3 {
        println!("Usage: png2ico <output> <png>...");
        return;
    }
    let output = env::args().nth(1).unwrap();
    let sources = env::args()
        .skip(2)
        .map(|path| IconSource::for_png_file(path).expect("failed to read PNG header"))
        .collect::<Vec<_>>();
    let icondir = IconDir::assemble(sources).expect("failed to read source images");
    icondir.save(&output).expect("failed to write ICO file");
}
