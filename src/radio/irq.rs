use super::{commands, registers, Nrf24l01, Nrf24l01Error};
use crate::types::{IrqEvent, StatusFlags, TxResult};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

impl<'a, SPI, DO, DELAY> Nrf24l01<'a, SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Service the radio after its IRQ pin fired.
    ///
    /// Call this from the interrupt context (or a task it wakes). The CE pin
    /// is held low while the STATUS register is read and written back (which
    /// clears every latched flag), then each flag is dispatched in a fixed
    /// order:
    ///
    /// 1. TX_FULL emits [`IrqEvent::TxFull`].
    /// 2. MAX_RT flushes the TX FIFO, resolves the shared [`TxState`] cell as
    ///    [`TxResult::Failed`], and emits [`IrqEvent::MaxRt`].
    /// 3. TX_DS resolves the cell as [`TxResult::Done`] and emits
    ///    [`IrqEvent::TxDs`].
    /// 4. RX_DR reads the top payload's width; a width above 32 flushes the
    ///    RX FIFO instead of reading. Otherwise the payload is read, reversed
    ///    to MSB first, and emitted as [`IrqEvent::RxDr`] along with its pipe.
    ///
    /// CE returns high on every exit path. If the bus fails mid-dispatch, the
    /// error is returned after the restore attempt; events already emitted
    /// stay delivered, and the chip keeps the un-serviced flags latched for
    /// the next invocation.
    ///
    /// [`TxState`]: crate::TxState
    pub fn irq_handler<F>(
        &mut self,
        mut on_event: F,
    ) -> Result<(), Nrf24l01Error<SPI::Error, DO::Error>>
    where
        F: FnMut(IrqEvent),
    {
        self.require_init()?;
        self.ce_pin.set_low().map_err(Nrf24l01Error::Gpo)?;
        let result = self.dispatch_interrupts(&mut on_event);
        // a dispatch error outranks a restore error
        match self.ce_pin.set_high() {
            Ok(()) => result,
            Err(e) => result.and(Err(Nrf24l01Error::Gpo(e))),
        }
    }

    fn dispatch_interrupts<F>(
        &mut self,
        on_event: &mut F,
    ) -> Result<(), Nrf24l01Error<SPI::Error, DO::Error>>
    where
        F: FnMut(IrqEvent),
    {
        self.spi_read(1, registers::STATUS)?;
        let flags = StatusFlags::from_bits(self._buf[1]);
        // writing the read value back clears the latched flags
        self.spi_write_byte(registers::STATUS, flags.into_bits())?;
        if flags.tx_full() {
            on_event(IrqEvent::TxFull);
        }
        if flags.max_rt() {
            self.spi_read(0, commands::FLUSH_TX)?;
            self._tx_state.set(TxResult::Failed);
            on_event(IrqEvent::MaxRt);
        }
        if flags.tx_ds() {
            self._tx_state.set(TxResult::Done);
            on_event(IrqEvent::TxDs);
        }
        if flags.rx_dr() {
            self.spi_read(1, commands::R_RX_PL_WID)?;
            let width = self._buf[1];
            if width > 32 {
                self.spi_read(0, commands::FLUSH_RX)?;
            } else {
                self.spi_read(width, commands::R_RX_PAYLOAD)?;
                let end = width as usize + 1;
                self._buf[1..end].reverse();
                on_event(IrqEvent::RxDr {
                    pipe: flags.rx_pipe(),
                    payload: &self._buf[1..end],
                });
            }
        }
        Ok(())
    }
}
