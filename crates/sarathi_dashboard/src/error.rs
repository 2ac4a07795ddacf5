use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error("Passenger increase must be between -50% and 100%, got {0}%")]
    PassengerIncreaseOutOfRange(i32),

    #[error("Traffic congestion factor must be between 0.5 and 2.0, got {0}")]
    CongestionFactorOutOfRange(f64),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    #[error("Unknown city {0:?}")]
    UnknownCity(String),

    #[error(transparent)]
    Simulation(#[from] SimulationError),
}
