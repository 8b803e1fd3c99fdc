//! Accelerometer trait

/// Errors that can occur when talking to the accelerometer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelError {
    /// Bus communication failed
    Bus,
    /// Identification register returned an unexpected id
    WrongChip,
    /// No fresh sample available yet
    NotReady,
}

/// Trait for lateral tilt sensors
///
/// Implementations deliver gravity-including acceleration along the
/// device's lateral axis. Sample pacing is up to the caller; there is no
/// guaranteed minimum or maximum inter-sample interval.
#[allow(async_fn_in_trait)]
pub trait TiltSensor {
    /// Probe and configure the sensor
    ///
    /// Fails with [`AccelError::WrongChip`] when the device on the bus is
    /// not the expected part. Not retried; a failed probe is terminal for
    /// the session.
    async fn init(&mut self) -> Result<(), AccelError>;

    /// Read the lateral acceleration in m/s², gravity component included
    async fn read_lateral_ms2(&mut self) -> Result<f32, AccelError>;
}
