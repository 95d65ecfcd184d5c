pub mod frame;
pub mod packet;
pub mod player;
pub mod raster;
pub mod stream;

pub mod error {
  #[derive(Debug)]
  pub enum CdgError {
    IO(std::io::Error),
  }

  impl std::error::Error for CdgError {}

  impl std::fmt::Display for CdgError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
      write!(f, "{:?}", self)
    }
  }

  impl From<std::io::Error> for CdgError {
    fn from(error: std::io::Error) -> Self {
      CdgError::IO(error)
    }
  }
}
