use std::path::PathBuf;

use crate::error::Result;
use crate::pipeline;
use crate::settings::{default_output_path, get_data_dir};

pub fn run(input: Option<&str>, output: Option<&str>) -> Result<()> {
    let input_dir = input.map(PathBuf::from).unwrap_or_else(get_data_dir);
    let output_path = output.map(PathBuf::from).unwrap_or_else(default_output_path);

    let result = pipeline::run(&input_dir, &output_path)?;

    println!(
        "Wrote {} rows -> {}",
        result.rows_written,
        result.output_path.display()
    );
    Ok(())
}
