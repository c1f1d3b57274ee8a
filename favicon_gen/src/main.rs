mod filemanager;

use filemanager::{generate_icon, GenerateError};
use lib_ico::IconConfig;

fn main() -> Result<(), GenerateError> {
    lib_ico::init_logging();

    let config = IconConfig::default();
    let path = generate_icon(&config)?;

    println!("Favicon saved successfully to {}", path.display());

    Ok(())
}
