use super::{commands, Nrf24l01, Nrf24l01Error};
use crate::types::TxResult;
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

impl<'a, SPI, DO, DELAY> Nrf24l01<'a, SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Tune the polling budget [`Nrf24l01::send()`] blocks on.
    ///
    /// `send()` waits up to `poll_count` iterations of `poll_delay_ms`
    /// milliseconds each for the interrupt context to resolve the
    /// transmission. The defaults are 5000 iterations of 1 ms.
    pub fn set_send_timeout(&mut self, poll_count: u16, poll_delay_ms: u32) {
        self._poll_count = poll_count;
        self._poll_delay_ms = poll_delay_ms;
    }

    /// Transmit `buf` and block until the transmission resolves.
    ///
    /// `buf` is given MSB first and may span at most 32 bytes. The payload is
    /// pushed with W_TX_PAYLOAD and the CE pin is pulsed low-high to start the
    /// transmission; the radio must already be powered up in TX mode (see
    /// [`Nrf24l01::set_config()`] and [`Nrf24l01::set_mode()`]).
    ///
    /// Completion is reported by the chip's IRQ pin, serviced by
    /// [`Nrf24l01::irq_handler()`] through the shared [`TxState`] cell:
    /// TX_DS resolves to `Ok`, MAX_RT to [`Nrf24l01Error::SendFailed`].
    /// If the cell is still pending after the configured polling budget
    /// (see [`Nrf24l01::set_send_timeout()`], default 5000 x 1 ms), the
    /// result is [`Nrf24l01Error::SendTimeout`].
    ///
    /// [`TxState`]: crate::TxState
    pub fn send(&mut self, buf: &[u8]) -> Result<(), Nrf24l01Error<SPI::Error, DO::Error>> {
        self.require_init()?;
        let len = buf.len();
        if len > 32 {
            return Err(Nrf24l01Error::InvalidArgument);
        }
        let mut staging = [0u8; 32];
        staging[..len].copy_from_slice(buf);
        staging[..len].reverse();
        self._tx_state.set(TxResult::Pending);
        self.ce_pin.set_low().map_err(Nrf24l01Error::Gpo)?;
        self.spi_write_buf(commands::W_TX_PAYLOAD, &staging[..len])?;
        self.ce_pin.set_high().map_err(Nrf24l01Error::Gpo)?;
        let mut remaining = self._poll_count;
        while remaining != 0 && self._tx_state.get() == TxResult::Pending {
            self._delay_impl.delay_ms(self._poll_delay_ms);
            remaining -= 1;
        }
        // an exhausted budget reports timeout even if the interrupt landed
        // during the final delay
        if remaining == 0 {
            return Err(Nrf24l01Error::SendTimeout);
        }
        match self._tx_state.get() {
            TxResult::Done => Ok(()),
            _ => Err(Nrf24l01Error::SendFailed),
        }
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{commands, Nrf24l01, Nrf24l01Error, TxResult};
    use crate::{radio::registers, spi_test_expects, types::TxState};
    use embedded_hal::delay::DelayNs;
    use embedded_hal_mock::eh1::{
        delay::{CheckedDelay, NoopDelay, Transaction as DelayTransaction},
        digital::{Mock as PinMock, State as PinState, Transaction as PinTransaction},
        spi::{Mock as SpiMock, Transaction as SpiTransaction},
    };
    use std::{boxed::Box, vec};

    /// A delay double that services the radio's interrupt, standing in for
    /// the IRQ pin firing while send() sleeps.
    struct IrqDrivingDelay {
        radio: Nrf24l01<'static, SpiMock<u8>, PinMock, NoopDelay>,
    }

    impl DelayNs for IrqDrivingDelay {
        fn delay_ns(&mut self, _ns: u32) {
            self.radio.irq_handler(|_| {}).unwrap();
        }
    }

    /// A delay double that resolves the shared cell as a failed transmission.
    struct MaxRtDelay {
        tx_state: &'static TxState,
    }

    impl DelayNs for MaxRtDelay {
        fn delay_ns(&mut self, _ns: u32) {
            self.tx_state.set(TxResult::Failed);
        }
    }

    #[test]
    pub fn send_resolves_when_irq_reports_tx_ds() {
        let tx_state: &'static TxState = Box::leak(Box::new(TxState::new()));

        // the IRQ side: a second handle on its own bus, sharing only the cell
        let irq_ce_expectations = [
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ];
        let irq_spi_expectations = spi_test_expects![
            // read STATUS with TX_DS latched
            (vec![registers::STATUS, 0u8], vec![0x2Eu8, 0x2Eu8]),
            // write the same byte back to clear it
            (
                vec![registers::STATUS | commands::W_REGISTER, 0x2Eu8],
                vec![0x2Eu8, 0u8],
            ),
        ];
        let mut irq_spi = SpiMock::new(&irq_spi_expectations);
        let mut irq_ce_pin = PinMock::new(&irq_ce_expectations);
        let mut irq_radio = Nrf24l01::new(
            irq_ce_pin.clone(),
            irq_spi.clone(),
            NoopDelay,
            tx_state,
        );
        irq_radio.init().unwrap();

        let ce_expectations = [
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ];
        // a full 32 byte payload, reversed onto the wire
        let mut payload_wire = vec![commands::W_TX_PAYLOAD];
        payload_wire.extend((1u8..=32).rev());
        let mut payload_response = vec![0xEu8];
        payload_response.resize(33, 0);
        let spi_expectations = spi_test_expects![(payload_wire, payload_response),];
        let mut spi = SpiMock::new(&spi_expectations);
        let mut ce_pin = PinMock::new(&ce_expectations);
        let mut radio = Nrf24l01::new(
            ce_pin.clone(),
            spi.clone(),
            IrqDrivingDelay { radio: irq_radio },
            tx_state,
        );
        radio.init().unwrap();

        let payload: [u8; 32] = std::array::from_fn(|i| i as u8 + 1);
        radio.send(&payload).unwrap();
        assert_eq!(tx_state.get(), TxResult::Done);
        spi.done();
        ce_pin.done();
        irq_spi.done();
        irq_ce_pin.done();
    }

    #[test]
    pub fn send_times_out_after_polling_budget() {
        let tx_state = TxState::new();
        let delay_expectations = vec![DelayTransaction::delay_ms(1); 5000];
        let delay = CheckedDelay::new(&delay_expectations);
        let mut delay_done = delay.clone();

        let ce_expectations = [
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ];
        let spi_expectations = spi_test_expects![
            (
                vec![commands::W_TX_PAYLOAD, 3u8, 2u8, 1u8],
                vec![0xEu8, 0u8, 0u8, 0u8],
            ),
        ];
        let mut spi = SpiMock::new(&spi_expectations);
        let mut ce_pin = PinMock::new(&ce_expectations);
        let mut radio = Nrf24l01::new(ce_pin.clone(), spi.clone(), delay, &tx_state);
        radio.init().unwrap();

        assert_eq!(radio.send(&[1, 2, 3]), Err(Nrf24l01Error::SendTimeout));
        // every last polling iteration was spent waiting
        delay_done.done();
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn send_honors_configured_timeout() {
        let tx_state = TxState::new();
        let delay_expectations = vec![DelayTransaction::delay_ms(2); 3];
        let delay = CheckedDelay::new(&delay_expectations);
        let mut delay_done = delay.clone();

        let ce_expectations = [
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ];
        let spi_expectations = spi_test_expects![
            (vec![commands::W_TX_PAYLOAD, 0xAAu8], vec![0xEu8, 0u8]),
        ];
        let mut spi = SpiMock::new(&spi_expectations);
        let mut ce_pin = PinMock::new(&ce_expectations);
        let mut radio = Nrf24l01::new(ce_pin.clone(), spi.clone(), delay, &tx_state);
        radio.init().unwrap();
        radio.set_send_timeout(3, 2);

        assert_eq!(radio.send(&[0xAA]), Err(Nrf24l01Error::SendTimeout));
        delay_done.done();
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn send_reports_exhausted_retransmits() {
        let tx_state: &'static TxState = Box::leak(Box::new(TxState::new()));

        let ce_expectations = [
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ];
        let spi_expectations = spi_test_expects![
            (vec![commands::W_TX_PAYLOAD, 0xCCu8], vec![0xEu8, 0u8]),
        ];
        let mut spi = SpiMock::new(&spi_expectations);
        let mut ce_pin = PinMock::new(&ce_expectations);
        let mut radio = Nrf24l01::new(
            ce_pin.clone(),
            spi.clone(),
            MaxRtDelay { tx_state },
            tx_state,
        );
        radio.init().unwrap();

        assert_eq!(radio.send(&[0xCC]), Err(Nrf24l01Error::SendFailed));
        assert_eq!(tx_state.get(), TxResult::Failed);
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn send_rejects_oversized_payload() {
        let tx_state = TxState::new();
        let ce_expectations = [PinTransaction::set(PinState::Low)];
        let mut spi = SpiMock::new(&[]);
        let mut ce_pin = PinMock::new(&ce_expectations);
        let mut radio = Nrf24l01::new(ce_pin.clone(), spi.clone(), NoopDelay, &tx_state);
        radio.init().unwrap();
        let oversized = [0u8; 33];
        assert_eq!(radio.send(&oversized), Err(Nrf24l01Error::InvalidArgument));
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn send_requires_init() {
        let tx_state = TxState::new();
        let mut spi = SpiMock::new(&[]);
        let mut ce_pin = PinMock::new(&[]);
        let mut radio = Nrf24l01::new(ce_pin.clone(), spi.clone(), NoopDelay, &tx_state);
        assert_eq!(radio.send(&[0xCC]), Err(Nrf24l01Error::NotInitialized));
        spi.done();
        ce_pin.done();
    }
}
