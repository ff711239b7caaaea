use thiserror::Error;

pub type ParamsResult<T> = Result<T, ParamsError>;

#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("target length {value} is outside the supported range {min}-{max}")]
    TargetLengthOutOfRange { value: i64, min: u32, max: u32 },
}
