use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Cannot assemble chart '{0}' from an empty series")]
    EmptySeries(String),
}
