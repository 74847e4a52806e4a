use super::{commands, registers, Nrf24l01, Nrf24l01Error};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

impl<'a, SPI, DO, DELAY> Nrf24l01<'a, SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Initialize the radio handle.
    ///
    /// Parks the CE pin low (standby) and marks the handle ready. Every other
    /// operation fails with [`Nrf24l01Error::NotInitialized`] until this
    /// succeeds. The SPI bus and pins themselves are brought up by whoever
    /// constructed them.
    pub fn init(&mut self) -> Result<(), Nrf24l01Error<SPI::Error, DO::Error>> {
        self.ce_pin.set_low().map_err(Nrf24l01Error::Gpo)?;
        self._inited = true;
        Ok(())
    }

    /// Shut the radio down.
    ///
    /// Probes the bus with a NOP, clears the CONFIG register's PWR_UP bit,
    /// parks the CE pin low, and marks the handle uninitialized. The handle
    /// can be revived with another [`Nrf24l01::init()`].
    pub fn deinit(&mut self) -> Result<(), Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        self.spi_read(0, commands::NOP)?;
        self.spi_read(1, registers::CONFIG)?;
        let out = self._buf[1] & !2;
        self.spi_write_byte(registers::CONFIG, out)?;
        self.ce_pin.set_low().map_err(Nrf24l01Error::Gpo)?;
        self._inited = false;
        Ok(())
    }

    /// Drive the CE pin directly.
    ///
    /// `true` leaves standby (active RX/TX per the CONFIG register's PRIM_RX
    /// bit); `false` returns to standby. [`Nrf24l01::send()`] and
    /// [`Nrf24l01::irq_handler()`] pulse the pin themselves.
    pub fn set_active(
        &mut self,
        enable: bool,
    ) -> Result<(), Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        if enable {
            self.ce_pin.set_high()
        } else {
            self.ce_pin.set_low()
        }
        .map_err(Nrf24l01Error::Gpo)
    }
}
