use super::{commands, registers, Nrf24l01, Nrf24l01Error};
use crate::types::Interrupt;
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

impl<'a, SPI, DO, DELAY> Nrf24l01<'a, SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Is the given interrupt flag currently latched?
    ///
    /// Performs a fresh STATUS register read.
    pub fn get_interrupt(
        &mut self,
        interrupt: Interrupt,
    ) -> Result<bool, Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        self.spi_read(1, registers::STATUS)?;
        Ok(self._buf[1] >> interrupt.into_bits() & 1 == 1)
    }

    /// Clear the given interrupt flag.
    ///
    /// The STATUS register clears on writing 1; the read value is written back
    /// with the selected bit set, so other flags latched at read time are
    /// cleared along with it.
    pub fn clear_interrupt(
        &mut self,
        interrupt: Interrupt,
    ) -> Result<(), Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        self.spi_read(1, registers::STATUS)?;
        let out = self._buf[1] | (1 << interrupt.into_bits());
        self.spi_write_byte(registers::STATUS, out)
    }

    /// Which pipe holds the payload at the top of the RX FIFO?
    ///
    /// Returns the STATUS register's RX_P_NO field: 0-5, or 7 when the RX
    /// FIFO is empty.
    pub fn get_data_pipe_number(&mut self) -> Result<u8, Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        self.spi_read(1, registers::STATUS)?;
        Ok(self._buf[1] >> 1 & 7)
    }

    /// Get the lost packet count (the OBSERVE_TX register's PLOS_CNT field).
    ///
    /// Saturates at 15; resets on an RF channel write.
    pub fn get_lost_packet_count(&mut self) -> Result<u8, Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        self.spi_read(1, registers::OBSERVE_TX)?;
        Ok(self._buf[1] >> 4)
    }

    /// Get the retransmitted packet count (the OBSERVE_TX register's ARC_CNT
    /// field). Resets on every new transmission.
    pub fn get_retransmitted_packet_count(
        &mut self,
    ) -> Result<u8, Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        self.spi_read(1, registers::OBSERVE_TX)?;
        Ok(self._buf[1] & 0xF)
    }

    /// Is a carrier above -64 dBm present on the current channel?
    ///
    /// Reads the RPD register; only meaningful in RX mode.
    pub fn get_received_power_detector(
        &mut self,
    ) -> Result<bool, Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        self.spi_read(1, registers::RPD)?;
        Ok(self._buf[1] & 1 == 1)
    }

    /// Send a NOP command.
    ///
    /// The only effect is refreshing the STATUS copy returned by
    /// [`Nrf24l01::status()`].
    pub fn nop(&mut self) -> Result<(), Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        self.spi_read(0, commands::NOP)
    }
}
