use crate::errors::AppResult;
use crate::import::SAMPLE_CSV;

pub fn handle() -> AppResult<()> {
    print!("{SAMPLE_CSV}");
    Ok(())
}
