pub trait Algo {
    fn assign(&mut self) -> Result<(), eyre::Error>;
}
