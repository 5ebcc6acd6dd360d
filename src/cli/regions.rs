use std::path::PathBuf;

use crate::dataset;
use crate::error::Result;
use crate::settings::default_output_path;

pub fn run(data: Option<&str>) -> Result<()> {
    let path = data.map(PathBuf::from).unwrap_or_else(default_output_path);
    let records = dataset::load(&path)?;

    println!("all (no filter)");
    for region in dataset::distinct_regions(&records) {
        println!("{region}");
    }
    Ok(())
}
