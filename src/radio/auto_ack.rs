use super::{commands, registers, Nrf24l01, Nrf24l01Error};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

/// Convert a retransmit delay in microseconds to a SETUP_RETR ARD field value.
pub const fn auto_retransmit_delay_from_us(us: u32) -> u8 {
    (us / 250) as u8
}

/// Convert a SETUP_RETR ARD field value to a retransmit delay in microseconds.
pub const fn auto_retransmit_delay_to_us(reg: u8) -> u32 {
    reg as u32 * 250
}

impl<'a, SPI, DO, DELAY> Nrf24l01<'a, SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Enable or disable auto-acknowledgment on the given `pipe` (0-5).
    pub fn set_auto_acknowledgment(
        &mut self,
        pipe: u8,
        enable: bool,
    ) -> Result<(), Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        if pipe > 5 {
            return Err(Nrf24l01Error::InvalidArgument);
        }
        self.spi_read(1, registers::EN_AA)?;
        let out = self._buf[1] & !(1 << pipe) | ((enable as u8) << pipe);
        self.spi_write_byte(registers::EN_AA, out)
    }

    /// Is auto-acknowledgment enabled on the given `pipe` (0-5)?
    pub fn get_auto_acknowledgment(
        &mut self,
        pipe: u8,
    ) -> Result<bool, Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        if pipe > 5 {
            return Err(Nrf24l01Error::InvalidArgument);
        }
        self.spi_read(1, registers::EN_AA)?;
        Ok(self._buf[1] >> pipe & 1 == 1)
    }

    /// Enable or disable ACK payloads (the FEATURE register's EN_ACK_PAY bit).
    ///
    /// ACK payloads require dynamic payloads; see
    /// [`Nrf24l01::set_dynamic_payload()`].
    pub fn set_payload_with_ack(
        &mut self,
        enable: bool,
    ) -> Result<(), Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        self.spi_read(1, registers::FEATURE)?;
        let out = self._buf[1] & !2 | ((enable as u8) << 1);
        self.spi_write_byte(registers::FEATURE, out)
    }

    /// Are ACK payloads enabled?
    pub fn get_payload_with_ack(&mut self) -> Result<bool, Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        self.spi_read(1, registers::FEATURE)?;
        Ok(self._buf[1] >> 1 & 1 == 1)
    }

    /// Enable or disable the W_TX_PAYLOAD_NO_ACK command (the FEATURE
    /// register's EN_DYN_ACK bit).
    pub fn set_tx_payload_with_no_ack(
        &mut self,
        enable: bool,
    ) -> Result<(), Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        self.spi_read(1, registers::FEATURE)?;
        let out = self._buf[1] & !1 | enable as u8;
        self.spi_write_byte(registers::FEATURE, out)
    }

    /// Is the W_TX_PAYLOAD_NO_ACK command enabled?
    pub fn get_tx_payload_with_no_ack(
        &mut self,
    ) -> Result<bool, Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        self.spi_read(1, registers::FEATURE)?;
        Ok(self._buf[1] & 1 == 1)
    }

    /// Set the auto retransmit delay (the SETUP_RETR register's ARD field).
    ///
    /// `delay` is in multiples of 250 microseconds and spans 4 bits; use
    /// [`auto_retransmit_delay_from_us`] to convert from a duration.
    pub fn set_auto_retransmit_delay(
        &mut self,
        delay: u8,
    ) -> Result<(), Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        if delay > 0xF {
            return Err(Nrf24l01Error::InvalidArgument);
        }
        self.spi_read(1, registers::SETUP_RETR)?;
        let out = self._buf[1] & 0xF | (delay << 4);
        self.spi_write_byte(registers::SETUP_RETR, out)
    }

    /// Get the auto retransmit delay (multiples of 250 microseconds).
    pub fn get_auto_retransmit_delay(&mut self) -> Result<u8, Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        self.spi_read(1, registers::SETUP_RETR)?;
        Ok(self._buf[1] >> 4)
    }

    /// Set the auto retransmit count (the SETUP_RETR register's ARC field).
    ///
    /// `count` spans 4 bits; 0 disables retransmission.
    pub fn set_auto_retransmit_count(
        &mut self,
        count: u8,
    ) -> Result<(), Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        if count > 0xF {
            return Err(Nrf24l01Error::InvalidArgument);
        }
        self.spi_read(1, registers::SETUP_RETR)?;
        let out = self._buf[1] & 0xF0 | count;
        self.spi_write_byte(registers::SETUP_RETR, out)
    }

    /// Get the auto retransmit count.
    pub fn get_auto_retransmit_count(&mut self) -> Result<u8, Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        self.spi_read(1, registers::SETUP_RETR)?;
        Ok(self._buf[1] & 0xF)
    }

    /// Queue `buf` as the payload attached to the next ACK sent on `pipe`
    /// (0-5).
    ///
    /// `buf` is given MSB first and may span at most 32 bytes.
    pub fn write_payload_with_ack(
        &mut self,
        pipe: u8,
        buf: &[u8],
    ) -> Result<(), Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        if pipe > 5 || buf.len() > 32 {
            return Err(Nrf24l01Error::InvalidArgument);
        }
        let mut staging = [0u8; 32];
        let len = buf.len();
        staging[..len].copy_from_slice(buf);
        staging[..len].reverse();
        self.spi_write_buf(commands::W_ACK_PAYLOAD | pipe, &staging[..len])
    }
}
