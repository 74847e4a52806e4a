use super::{commands, registers, Nrf24l01, Nrf24l01Error};
use crate::types::AddressWidth;
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

impl<'a, SPI, DO, DELAY> Nrf24l01<'a, SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Enable or disable the given RX `pipe` (0-5) in the EN_RXADDR register.
    pub fn set_rx_pipe(
        &mut self,
        pipe: u8,
        enable: bool,
    ) -> Result<(), Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        if pipe > 5 {
            return Err(Nrf24l01Error::InvalidArgument);
        }
        self.spi_read(1, registers::EN_RXADDR)?;
        let out = self._buf[1] & !(1 << pipe) | ((enable as u8) << pipe);
        self.spi_write_byte(registers::EN_RXADDR, out)
    }

    /// Is the given RX `pipe` (0-5) enabled?
    pub fn get_rx_pipe(&mut self, pipe: u8) -> Result<bool, Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        if pipe > 5 {
            return Err(Nrf24l01Error::InvalidArgument);
        }
        self.spi_read(1, registers::EN_RXADDR)?;
        Ok(self._buf[1] >> pipe & 1 == 1)
    }

    /// Set the address width shared by the TX address and RX pipes 0/1
    /// (the SETUP_AW register's 2-bit AW field).
    pub fn set_address_width(
        &mut self,
        width: AddressWidth,
    ) -> Result<(), Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        self.spi_read(1, registers::SETUP_AW)?;
        let out = self._buf[1] & !3 | width.into_bits();
        self.spi_write_byte(registers::SETUP_AW, out)
    }

    /// Get the configured address width.
    pub fn get_address_width(
        &mut self,
    ) -> Result<AddressWidth, Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        self.spi_read(1, registers::SETUP_AW)?;
        Ok(AddressWidth::from_bits(self._buf[1]))
    }

    /// Read SETUP_AW and map the width code to a byte count, rejecting the
    /// reserved code 0.
    fn address_width_bytes(&mut self) -> Result<u8, Nrf24l01Error<SPI::Error, DO::Error>> {
        self.spi_read(1, registers::SETUP_AW)?;
        let code = self._buf[1] & 3;
        if code == 0 {
            return Err(Nrf24l01Error::InvalidArgument);
        }
        Ok(code + 2)
    }

    fn write_full_address(
        &mut self,
        reg: u8,
        address: &[u8],
    ) -> Result<(), Nrf24l01Error<SPI::Error, DO::Error>> {
        let width = self.address_width_bytes()?;
        let len = address.len();
        if len > width as usize {
            return Err(Nrf24l01Error::InvalidArgument);
        }
        let mut staging = [0u8; 5];
        staging[..len].copy_from_slice(address);
        staging[..len].reverse();
        self.spi_write_buf(reg, &staging[..len])
    }

    fn read_full_address(
        &mut self,
        reg: u8,
        buf: &mut [u8],
    ) -> Result<u8, Nrf24l01Error<SPI::Error, DO::Error>> {
        let width = self.address_width_bytes()?;
        if buf.len() < width as usize {
            return Err(Nrf24l01Error::InvalidArgument);
        }
        self.spi_read(width, reg)?;
        self._buf[1..(width as usize + 1)].reverse();
        buf[..width as usize].copy_from_slice(&self._buf[1..(width as usize + 1)]);
        Ok(width)
    }

    /// Set the RX address for the given `pipe` (0-5).
    ///
    /// `address` is given MSB first. Pipes 0 and 1 hold a full address: the
    /// configured width is read from SETUP_AW, a reserved width rejects the
    /// call, and `address` may not exceed it. Pipes 2-5 share pipe 1's upper
    /// bytes, so only the last (least significant) byte of `address` is
    /// written.
    pub fn set_rx_address(
        &mut self,
        pipe: u8,
        address: &[u8],
    ) -> Result<(), Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        if pipe > 5 {
            return Err(Nrf24l01Error::InvalidArgument);
        }
        if pipe < 2 {
            return self.write_full_address(registers::RX_ADDR_P0 + pipe, address);
        }
        let len = address.len();
        if len == 0 {
            return Err(Nrf24l01Error::InvalidArgument);
        }
        self.spi_write_byte(registers::RX_ADDR_P0 + pipe, address[len - 1])
    }

    /// Get the RX address for the given `pipe` (0-5).
    ///
    /// Returns the number of bytes written to `buf` (the configured width for
    /// pipes 0/1, 1 for pipes 2-5), MSB first.
    pub fn get_rx_address(
        &mut self,
        pipe: u8,
        buf: &mut [u8],
    ) -> Result<u8, Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        if pipe > 5 {
            return Err(Nrf24l01Error::InvalidArgument);
        }
        if pipe < 2 {
            return self.read_full_address(registers::RX_ADDR_P0 + pipe, buf);
        }
        if buf.is_empty() {
            return Err(Nrf24l01Error::InvalidArgument);
        }
        self.spi_read(1, registers::RX_ADDR_P0 + pipe)?;
        buf[0] = self._buf[1];
        Ok(1)
    }

    /// Set the TX address, MSB first.
    ///
    /// Same width contract as RX pipes 0/1. For auto-acknowledged
    /// transmissions, RX pipe 0 must carry the same address.
    pub fn set_tx_address(
        &mut self,
        address: &[u8],
    ) -> Result<(), Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        self.write_full_address(registers::TX_ADDR, address)
    }

    /// Get the TX address, MSB first. Returns the number of bytes written to
    /// `buf`.
    pub fn get_tx_address(
        &mut self,
        buf: &mut [u8],
    ) -> Result<u8, Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        self.read_full_address(registers::TX_ADDR, buf)
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{commands, registers, AddressWidth};
    use crate::{radio::Nrf24l01Error, spi_test_expects, test::mk_radio};
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::vec;

    #[test]
    pub fn set_rx_pipe_preserves_unrelated_bits() {
        let spi_expectations = spi_test_expects![
            (vec![registers::EN_RXADDR, 0u8], vec![0xEu8, 0x3Du8]),
            (
                vec![registers::EN_RXADDR | commands::W_REGISTER, 0x3Fu8],
                vec![0xEu8, 0u8],
            ),
            (vec![registers::EN_RXADDR, 0u8], vec![0xEu8, 0x3Fu8]),
            (
                vec![registers::EN_RXADDR | commands::W_REGISTER, 0x3Eu8],
                vec![0xEu8, 0u8],
            ),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.set_rx_pipe(1, true).unwrap();
        radio.set_rx_pipe(0, false).unwrap();
        assert_eq!(
            radio.set_rx_pipe(6, true),
            Err(Nrf24l01Error::InvalidArgument)
        );
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn get_rx_pipe() {
        let spi_expectations = spi_test_expects![
            (vec![registers::EN_RXADDR, 0u8], vec![0xEu8, 2u8]),
            (vec![registers::EN_RXADDR, 2u8], vec![0xEu8, 2u8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert!(radio.get_rx_pipe(1).unwrap());
        assert!(!radio.get_rx_pipe(5).unwrap());
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn set_address_width() {
        let spi_expectations = spi_test_expects![
            (vec![registers::SETUP_AW, 0u8], vec![0xEu8, 0xF1u8]),
            // only the AW field changes
            (
                vec![registers::SETUP_AW | commands::W_REGISTER, 0xF3u8],
                vec![0xEu8, 0u8],
            ),
            (vec![registers::SETUP_AW, 0u8], vec![0xEu8, 0xF3u8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.set_address_width(AddressWidth::Bytes5).unwrap();
        assert_eq!(radio.get_address_width().unwrap(), AddressWidth::Bytes5);
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn set_rx_address_full_pipe() {
        let spi_expectations = spi_test_expects![
            // the configured width gates the transfer
            (vec![registers::SETUP_AW, 0u8], vec![0xEu8, 3u8]),
            // the address goes out LSB first on the wire
            (
                vec![
                    registers::RX_ADDR_P0 | commands::W_REGISTER,
                    0xA3u8,
                    0xB4u8,
                    0xC5u8,
                    0xD6u8,
                    0xE7u8,
                ],
                vec![0xEu8, 0u8, 0u8, 0u8, 0u8, 0u8],
            ),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio
            .set_rx_address(0, &[0xE7, 0xD6, 0xC5, 0xB4, 0xA3])
            .unwrap();
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn set_rx_address_rejects_illegal_width() {
        let spi_expectations = spi_test_expects![
            // AW field reads as the reserved code 0
            (vec![registers::SETUP_AW, 0u8], vec![0xEu8, 0xF0u8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert_eq!(
            radio.set_rx_address(0, &[0xE7, 0xD6, 0xC5]),
            Err(Nrf24l01Error::InvalidArgument)
        );
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn set_rx_address_rejects_oversized_address() {
        let spi_expectations = spi_test_expects![
            // 3-byte width configured
            (vec![registers::SETUP_AW, 0u8], vec![0xEu8, 1u8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert_eq!(
            radio.set_rx_address(1, &[0xE7, 0xD6, 0xC5, 0xB4]),
            Err(Nrf24l01Error::InvalidArgument)
        );
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn get_rx_address_full_pipe() {
        let spi_expectations = spi_test_expects![
            (vec![registers::SETUP_AW, 0u8], vec![0xEu8, 1u8]),
            // the wire is LSB first; residue from the SETUP_AW read rides along
            (
                vec![registers::RX_ADDR_P0 + 1u8, 1u8, 0u8, 0u8],
                vec![0xEu8, 0xA3u8, 0xB4u8, 0xC5u8],
            ),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        let mut buf = [0u8; 5];
        assert_eq!(radio.get_rx_address(1, &mut buf).unwrap(), 3);
        assert_eq!(buf[..3], [0xC5, 0xB4, 0xA3]);
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn get_rx_address_rejects_short_buf() {
        let spi_expectations = spi_test_expects![
            // 5-byte width configured
            (vec![registers::SETUP_AW, 0u8], vec![0xEu8, 3u8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        let mut buf = [0u8; 3];
        assert_eq!(
            radio.get_rx_address(0, &mut buf),
            Err(Nrf24l01Error::InvalidArgument)
        );
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn short_pipe_addresses() {
        let spi_expectations = spi_test_expects![
            // pipes 2-5 take a single byte, no SETUP_AW traffic
            (
                vec![registers::RX_ADDR_P0 + 2u8 | commands::W_REGISTER, 0xA3u8],
                vec![0xEu8, 0u8],
            ),
            (vec![registers::RX_ADDR_P0 + 3u8, 0u8], vec![0xEu8, 0xC4u8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        // only the last (least significant) byte is written
        radio.set_rx_address(2, &[0xC5, 0xB4, 0xA3]).unwrap();
        let mut buf = [0u8; 1];
        assert_eq!(radio.get_rx_address(3, &mut buf).unwrap(), 1);
        assert_eq!(buf[0], 0xC4);
        assert_eq!(
            radio.set_rx_address(2, &[]),
            Err(Nrf24l01Error::InvalidArgument)
        );
        assert_eq!(
            radio.get_rx_address(2, &mut []),
            Err(Nrf24l01Error::InvalidArgument)
        );
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn tx_address_round_trip() {
        let spi_expectations = spi_test_expects![
            (vec![registers::SETUP_AW, 0u8], vec![0xEu8, 3u8]),
            (
                vec![
                    registers::TX_ADDR | commands::W_REGISTER,
                    0xA3u8,
                    0xB4u8,
                    0xC5u8,
                    0xD6u8,
                    0xE7u8,
                ],
                vec![0xEu8, 0u8, 0u8, 0u8, 0u8, 0u8],
            ),
            (vec![registers::SETUP_AW, 0u8], vec![0xEu8, 3u8]),
            (
                vec![registers::TX_ADDR, 3u8, 0u8, 0u8, 0u8, 0u8],
                vec![0xEu8, 0xA3u8, 0xB4u8, 0xC5u8, 0xD6u8, 0xE7u8],
            ),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        let address = [0xE7, 0xD6, 0xC5, 0xB4, 0xA3];
        radio.set_tx_address(&address).unwrap();
        let mut buf = [0u8; 5];
        assert_eq!(radio.get_tx_address(&mut buf).unwrap(), 5);
        assert_eq!(buf, address);
        spi.done();
        ce_pin.done();
    }
}
