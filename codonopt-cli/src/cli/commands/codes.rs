use anyhow::Result;
use codonopt_core::code::DEFAULT_TABLE_ID;
use codonopt_core::GeneticCode;
use colored::*;

pub fn run() -> Result<()> {
    for (id, name) in GeneticCode::available() {
        if id == DEFAULT_TABLE_ID {
            println!("{:>3}  {} {}", id, name, "(default)".green());
        } else {
            println!("{:>3}  {}", id, name);
        }
    }
    Ok(())
}
