use crate::dataset;
use crate::error::Result;
use crate::settings::{default_output_path, load_settings};

pub fn run() -> Result<()> {
    let settings = load_settings();
    let output = default_output_path();

    println!("Data dir:   {}", settings.data_dir);
    println!("Output:     {}", output.display());

    if output.exists() {
        let records = dataset::load(&output)?;
        let regions = dataset::distinct_regions(&records);
        let dates: Vec<_> = records.iter().map(|r| r.date).collect();

        println!();
        println!("Rows:       {}", records.len());
        if let (Some(min), Some(max)) = (dates.iter().min(), dates.iter().max()) {
            println!("Date range: {min} to {max}");
        }
        println!("Regions:    {}", regions.join(", "));
    } else {
        println!();
        println!("No consolidated dataset found. Run `morsel process` first.");
    }

    Ok(())
}
