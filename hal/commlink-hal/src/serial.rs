//! Serial byte-stream abstractions
//!
//! Traits for the blocking serial device that carries link frames,
//! implemented by chip-specific HALs.

/// Serial transmitter half.
pub trait SerialTx {
    /// Error type for transmit operations
    type Error;

    /// Write data to the device.
    ///
    /// Blocks until at least one byte has been accepted, and returns how
    /// many bytes were taken from `data`.
    fn write(&mut self, data: &[u8]) -> Result<usize, Self::Error>;

    /// Block until previously written bytes have left the peripheral.
    fn flush(&mut self) -> Result<(), Self::Error>;

    /// Write the whole buffer, retrying on short writes.
    fn write_all(&mut self, mut data: &[u8]) -> Result<(), Self::Error> {
        while !data.is_empty() {
            let written = self.write(data)?;
            data = &data[written..];
        }
        Ok(())
    }
}

/// Serial receiver half.
pub trait SerialRx {
    /// Error type for receive operations
    type Error;

    /// Read data from the device into `buf`.
    ///
    /// Blocks until at least one byte is available and returns how many
    /// bytes were placed in `buf`. Returning fewer bytes than `buf` holds
    /// is allowed; callers are expected to re-issue the read.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;

    /// Read a single byte from the device.
    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        let mut buf = [0u8; 1];
        while self.read(&mut buf)? == 0 {}
        Ok(buf[0])
    }
}

/// Combined bidirectional serial device.
///
/// For devices that provide both TX and RX on a single peripheral.
pub trait SerialPort: SerialTx + SerialRx {}

// Blanket implementation
impl<T: SerialTx + SerialRx> SerialPort for T {}
