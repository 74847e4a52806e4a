//! This module defines the public value types used throughout the driver API.

use core::{
    fmt::{Display, Formatter, Result},
    sync::atomic::{AtomicU8, Ordering},
    write,
};

use bitfield_struct::bitfield;

/// The chip's operating mode, stored in the CONFIG register's PRIM_RX bit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Mode {
    /// Primary transmitter.
    Tx,
    /// Primary receiver.
    Rx,
}

impl Mode {
    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            Mode::Tx => 0,
            Mode::Rx => 1,
        }
    }
    pub(crate) const fn from_bits(value: u8) -> Self {
        match value & 1 {
            0 => Mode::Tx,
            _ => Mode::Rx,
        }
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for Mode {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Mode::Tx => defmt::write!(fmt, "TX"),
            Mode::Rx => defmt::write!(fmt, "RX"),
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Mode::Tx => write!(f, "TX"),
            Mode::Rx => write!(f, "RX"),
        }
    }
}

/// Selects a single boolean field of the CONFIG register.
///
/// The three `Mask*` selectors *suppress* the corresponding interrupt on the
/// IRQ pin when set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Config {
    /// Mask the "RX data ready" interrupt.
    MaskRxDr,
    /// Mask the "TX data sent" interrupt.
    MaskTxDs,
    /// Mask the "max retransmits" interrupt.
    MaskMaxRt,
    /// Enable the CRC checksum.
    EnCrc,
    /// Use a 2 byte CRC checksum instead of 1 byte.
    Crco,
    /// Power up the chip.
    PwrUp,
}

impl Config {
    /// The bit position within the CONFIG register.
    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            Config::MaskRxDr => 6,
            Config::MaskTxDs => 5,
            Config::MaskMaxRt => 4,
            Config::EnCrc => 3,
            Config::Crco => 2,
            Config::PwrUp => 1,
        }
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for Config {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Config::MaskRxDr => defmt::write!(fmt, "MASK_RX_DR"),
            Config::MaskTxDs => defmt::write!(fmt, "MASK_TX_DS"),
            Config::MaskMaxRt => defmt::write!(fmt, "MASK_MAX_RT"),
            Config::EnCrc => defmt::write!(fmt, "EN_CRC"),
            Config::Crco => defmt::write!(fmt, "CRCO"),
            Config::PwrUp => defmt::write!(fmt, "PWR_UP"),
        }
    }
}

impl Display for Config {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Config::MaskRxDr => write!(f, "MASK_RX_DR"),
            Config::MaskTxDs => write!(f, "MASK_TX_DS"),
            Config::MaskMaxRt => write!(f, "MASK_MAX_RT"),
            Config::EnCrc => write!(f, "EN_CRC"),
            Config::Crco => write!(f, "CRCO"),
            Config::PwrUp => write!(f, "PWR_UP"),
        }
    }
}

/// The configured width of the addresses on pipes 0/1 and the TX address.
///
/// The zero width code is rejected by the chip; address accessors refuse to
/// touch the bus while it is configured.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AddressWidth {
    /// The reserved width code `0`.
    Illegal,
    /// 3 byte addresses.
    Bytes3,
    /// 4 byte addresses.
    Bytes4,
    /// 5 byte addresses.
    Bytes5,
}

impl AddressWidth {
    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            AddressWidth::Illegal => 0,
            AddressWidth::Bytes3 => 1,
            AddressWidth::Bytes4 => 2,
            AddressWidth::Bytes5 => 3,
        }
    }
    pub(crate) const fn from_bits(value: u8) -> Self {
        match value & 3 {
            0 => AddressWidth::Illegal,
            1 => AddressWidth::Bytes3,
            2 => AddressWidth::Bytes4,
            _ => AddressWidth::Bytes5,
        }
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for AddressWidth {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            AddressWidth::Illegal => defmt::write!(fmt, "illegal"),
            AddressWidth::Bytes3 => defmt::write!(fmt, "3 bytes"),
            AddressWidth::Bytes4 => defmt::write!(fmt, "4 bytes"),
            AddressWidth::Bytes5 => defmt::write!(fmt, "5 bytes"),
        }
    }
}

impl Display for AddressWidth {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            AddressWidth::Illegal => write!(f, "illegal"),
            AddressWidth::Bytes3 => write!(f, "3 bytes"),
            AddressWidth::Bytes4 => write!(f, "4 bytes"),
            AddressWidth::Bytes5 => write!(f, "5 bytes"),
        }
    }
}

/// How fast data moves through the air. Units are in bits per second (bps).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DataRate {
    /// represents 1 Mbps
    Mbps1,
    /// represents 2 Mbps
    Mbps2,
    /// represents 250 Kbps
    Kbps250,
}

impl DataRate {
    /// The RF_DR_LOW and RF_DR_HIGH bits of the RF_SETUP register.
    pub(crate) const MASK: u8 = 0x28;

    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            DataRate::Mbps1 => 0,
            DataRate::Mbps2 => 0x8,
            DataRate::Kbps250 => 0x20,
        }
    }
    pub(crate) const fn from_bits(value: u8) -> Self {
        match value & Self::MASK {
            0x8 => DataRate::Mbps2,
            0x20 => DataRate::Kbps250,
            _ => DataRate::Mbps1,
        }
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for DataRate {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            DataRate::Mbps1 => defmt::write!(fmt, "1 Mbps"),
            DataRate::Mbps2 => defmt::write!(fmt, "2 Mbps"),
            DataRate::Kbps250 => defmt::write!(fmt, "250 Kbps"),
        }
    }
}

impl Display for DataRate {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            DataRate::Mbps1 => write!(f, "1 Mbps"),
            DataRate::Mbps2 => write!(f, "2 Mbps"),
            DataRate::Kbps250 => write!(f, "250 Kbps"),
        }
    }
}

/// RF output power used in TX mode. The units dBm (decibel-milliwatts)
/// represent a logarithmic signal loss.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OutputPower {
    /// -18 dBm
    Min,
    /// -12 dBm
    Low,
    /// -6 dBm
    High,
    /// 0 dBm
    Max,
}

impl OutputPower {
    /// The RF_PWR bits of the RF_SETUP register.
    pub(crate) const MASK: u8 = 6;

    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            OutputPower::Min => 0,
            OutputPower::Low => 2,
            OutputPower::High => 4,
            OutputPower::Max => 6,
        }
    }
    pub(crate) const fn from_bits(value: u8) -> Self {
        match value & Self::MASK {
            0 => OutputPower::Min,
            2 => OutputPower::Low,
            4 => OutputPower::High,
            _ => OutputPower::Max,
        }
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for OutputPower {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            OutputPower::Min => defmt::write!(fmt, "-18 dBm"),
            OutputPower::Low => defmt::write!(fmt, "-12 dBm"),
            OutputPower::High => defmt::write!(fmt, "-6 dBm"),
            OutputPower::Max => defmt::write!(fmt, "0 dBm"),
        }
    }
}

impl Display for OutputPower {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            OutputPower::Min => write!(f, "-18 dBm"),
            OutputPower::Low => write!(f, "-12 dBm"),
            OutputPower::High => write!(f, "-6 dBm"),
            OutputPower::Max => write!(f, "0 dBm"),
        }
    }
}

/// Selects one of the STATUS register's interrupt flags.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Interrupt {
    /// A payload arrived in the RX FIFO.
    RxDr,
    /// A payload was sent (and acknowledged, if auto-ack is enabled).
    TxDs,
    /// A transmission exhausted its retransmit budget.
    MaxRt,
    /// The TX FIFO is full.
    TxFull,
}

impl Interrupt {
    /// The bit position within the STATUS register.
    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            Interrupt::RxDr => 6,
            Interrupt::TxDs => 5,
            Interrupt::MaxRt => 4,
            Interrupt::TxFull => 0,
        }
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for Interrupt {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Interrupt::RxDr => defmt::write!(fmt, "RX_DR"),
            Interrupt::TxDs => defmt::write!(fmt, "TX_DS"),
            Interrupt::MaxRt => defmt::write!(fmt, "MAX_RT"),
            Interrupt::TxFull => defmt::write!(fmt, "TX_FULL"),
        }
    }
}

impl Display for Interrupt {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Interrupt::RxDr => write!(f, "RX_DR"),
            Interrupt::TxDs => write!(f, "TX_DS"),
            Interrupt::MaxRt => write!(f, "MAX_RT"),
            Interrupt::TxFull => write!(f, "TX_FULL"),
        }
    }
}

/// The resolution of the transmission most recently started by
/// [`Nrf24l01::send()`](fn@crate::radio::Nrf24l01::send).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TxResult {
    /// No completion interrupt observed yet.
    Pending,
    /// The payload went out (TX_DS).
    Done,
    /// The retransmit budget was exhausted (MAX_RT).
    Failed,
}

impl TxResult {
    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            TxResult::Pending => 0,
            TxResult::Done => 1,
            TxResult::Failed => 2,
        }
    }
    pub(crate) const fn from_bits(value: u8) -> Self {
        match value {
            1 => TxResult::Done,
            2 => TxResult::Failed,
            _ => TxResult::Pending,
        }
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for TxResult {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            TxResult::Pending => defmt::write!(fmt, "pending"),
            TxResult::Done => defmt::write!(fmt, "done"),
            TxResult::Failed => defmt::write!(fmt, "failed"),
        }
    }
}

impl Display for TxResult {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            TxResult::Pending => write!(f, "pending"),
            TxResult::Done => write!(f, "done"),
            TxResult::Failed => write!(f, "failed"),
        }
    }
}

/// The send-completion cell shared between the caller context and the
/// interrupt context.
///
/// [`Nrf24l01::send()`](fn@crate::radio::Nrf24l01::send) resets the cell and
/// polls it; [`Nrf24l01::irq_handler()`](fn@crate::radio::Nrf24l01::irq_handler)
/// completes it when the radio reports TX_DS or MAX_RT. The cell is owned by
/// the caller (typically a `static`) so that the handle servicing the
/// interrupt can share it with the handle issuing `send()`.
#[derive(Debug)]
pub struct TxState {
    // load/store only, so this works on targets without CAS
    state: AtomicU8,
}

impl TxState {
    pub const fn new() -> Self {
        Self {
            state: AtomicU8::new(TxResult::Pending.into_bits()),
        }
    }

    /// The result of the transmission currently (or last) in flight.
    pub fn get(&self) -> TxResult {
        TxResult::from_bits(self.state.load(Ordering::Relaxed))
    }

    pub(crate) fn set(&self, result: TxResult) {
        self.state.store(result.into_bits(), Ordering::Relaxed);
    }
}

impl Default for TxState {
    fn default() -> Self {
        Self::new()
    }
}

/// An event delivered by
/// [`Nrf24l01::irq_handler()`](fn@crate::radio::Nrf24l01::irq_handler).
///
/// Multiple events can be delivered from a single handler invocation when the
/// radio latched more than one interrupt flag.
#[derive(Debug, PartialEq)]
pub enum IrqEvent<'a> {
    /// The TX FIFO is full.
    TxFull,
    /// A transmission exhausted its retransmit budget; the TX FIFO was flushed.
    MaxRt,
    /// A payload was sent.
    TxDs,
    /// A payload was received. `payload` is in MSB-first order and only valid
    /// for the duration of the callback.
    RxDr {
        /// The pipe (0-5) the payload arrived on.
        pipe: u8,
        payload: &'a [u8],
    },
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for IrqEvent<'_> {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            IrqEvent::TxFull => defmt::write!(fmt, "TX_FULL"),
            IrqEvent::MaxRt => defmt::write!(fmt, "MAX_RT"),
            IrqEvent::TxDs => defmt::write!(fmt, "TX_DS"),
            IrqEvent::RxDr { pipe, payload } => {
                defmt::write!(fmt, "RX_DR pipe: {}, {} bytes", pipe, payload.len())
            }
        }
    }
}

/// A view of the STATUS register.
///
/// Every SPI transfer shifts this register out while the command byte shifts
/// in; [`Nrf24l01::status()`](fn@crate::radio::Nrf24l01::status) returns the
/// copy captured by the most recent transfer.
#[bitfield(u8, new = false, order = Msb)]
pub struct StatusFlags {
    #[bits(1)]
    _padding: u8,

    /// A payload arrived in the RX FIFO.
    #[bits(1, access = RO)]
    pub rx_dr: bool,

    /// A payload was sent.
    #[bits(1, access = RO)]
    pub tx_ds: bool,

    /// A transmission exhausted its retransmit budget.
    #[bits(1, access = RO)]
    pub max_rt: bool,

    /// The pipe holding the top of the RX FIFO (7 when the FIFO is empty).
    #[bits(3, access = RO)]
    pub rx_pipe: u8,

    /// The TX FIFO is full.
    #[bits(1, access = RO)]
    pub tx_full: bool,
}

#[cfg(feature = "defmt")]
impl defmt::Format for StatusFlags {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "StatusFlags rx_dr: {}, tx_ds: {}, max_rt: {}",
            self.rx_dr(),
            self.tx_ds(),
            self.max_rt()
        )
    }
}

impl Display for StatusFlags {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "StatusFlags rx_dr: {}, tx_ds: {}, max_rt: {}",
            self.rx_dr(),
            self.tx_ds(),
            self.max_rt()
        )
    }
}

/// A view of the FIFO_STATUS register.
#[bitfield(u8, new = false, order = Msb)]
pub struct FifoStatus {
    #[bits(1)]
    _padding: u8,

    /// The last transmitted payload is being reused.
    #[bits(1, access = RO)]
    pub tx_reuse: bool,

    /// The TX FIFO is full.
    #[bits(1, access = RO)]
    pub tx_full: bool,

    /// The TX FIFO is empty.
    #[bits(1, access = RO)]
    pub tx_empty: bool,

    #[bits(2)]
    _reserved: u8,

    /// The RX FIFO is full.
    #[bits(1, access = RO)]
    pub rx_full: bool,

    /// The RX FIFO is empty.
    #[bits(1, access = RO)]
    pub rx_empty: bool,
}

#[cfg(feature = "defmt")]
impl defmt::Format for FifoStatus {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "FifoStatus tx_empty: {}, tx_full: {}, rx_empty: {}, rx_full: {}",
            self.tx_empty(),
            self.tx_full(),
            self.rx_empty(),
            self.rx_full()
        )
    }
}

impl Display for FifoStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "FifoStatus tx_empty: {}, tx_full: {}, rx_empty: {}, rx_full: {}",
            self.tx_empty(),
            self.tx_full(),
            self.rx_empty(),
            self.rx_full()
        )
    }
}

/// Static metadata about the driver and the chip it supports.
///
/// Returned by [`info()`](fn@crate::radio::info).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DriverInfo {
    pub chip_name: &'static str,
    pub manufacturer_name: &'static str,
    /// The bus the chip is driven over.
    pub interface: &'static str,
    pub supply_voltage_min_v: f32,
    pub supply_voltage_max_v: f32,
    pub max_current_ma: f32,
    pub temperature_min: f32,
    pub temperature_max: f32,
    pub driver_version: u32,
}

#[cfg(test)]
mod test {
    use super::{
        AddressWidth, Config, DataRate, FifoStatus, Interrupt, Mode, OutputPower, StatusFlags,
        TxResult, TxState,
    };
    extern crate std;
    use std::{format, string::String};

    fn display_mode(param: Mode, expected: String) -> bool {
        format!("{param}") == expected
    }

    #[test]
    fn mode_tx() {
        assert!(display_mode(Mode::Tx, String::from("TX")));
    }

    #[test]
    fn mode_rx() {
        assert!(display_mode(Mode::Rx, String::from("RX")));
    }

    #[test]
    fn mode_round_trip() {
        assert_eq!(Mode::from_bits(Mode::Tx.into_bits()), Mode::Tx);
        assert_eq!(Mode::from_bits(Mode::Rx.into_bits()), Mode::Rx);
    }

    fn display_config(param: Config, expected: String) -> bool {
        format!("{param}") == expected
    }

    #[test]
    fn config_bits() {
        assert!(display_config(Config::MaskRxDr, String::from("MASK_RX_DR")));
        assert!(display_config(Config::MaskTxDs, String::from("MASK_TX_DS")));
        assert!(display_config(
            Config::MaskMaxRt,
            String::from("MASK_MAX_RT")
        ));
        assert!(display_config(Config::EnCrc, String::from("EN_CRC")));
        assert!(display_config(Config::Crco, String::from("CRCO")));
        assert!(display_config(Config::PwrUp, String::from("PWR_UP")));
    }

    fn display_width(param: AddressWidth, expected: String) -> bool {
        format!("{param}") == expected
    }

    #[test]
    fn width_illegal() {
        assert!(display_width(AddressWidth::Illegal, String::from("illegal")));
    }

    #[test]
    fn width_3_bytes() {
        assert!(display_width(AddressWidth::Bytes3, String::from("3 bytes")));
    }

    #[test]
    fn width_5_bytes() {
        assert!(display_width(AddressWidth::Bytes5, String::from("5 bytes")));
    }

    fn display_data_rate(param: DataRate, expected: String) -> bool {
        format!("{param}") == expected
    }

    #[test]
    fn data_rate_1mbps() {
        assert!(display_data_rate(DataRate::Mbps1, String::from("1 Mbps")));
    }

    #[test]
    fn data_rate_2mbps() {
        assert!(display_data_rate(DataRate::Mbps2, String::from("2 Mbps")));
    }

    #[test]
    fn data_rate_250kbps() {
        assert!(display_data_rate(
            DataRate::Kbps250,
            String::from("250 Kbps")
        ));
    }

    fn display_output_power(param: OutputPower, expected: String) -> bool {
        format!("{param}") == expected
    }

    #[test]
    fn output_power_min() {
        assert!(display_output_power(
            OutputPower::Min,
            String::from("-18 dBm")
        ));
    }

    #[test]
    fn output_power_max() {
        assert!(display_output_power(OutputPower::Max, String::from("0 dBm")));
    }

    fn display_interrupt(param: Interrupt, expected: String) -> bool {
        format!("{param}") == expected
    }

    #[test]
    fn interrupt_names() {
        assert!(display_interrupt(Interrupt::RxDr, String::from("RX_DR")));
        assert!(display_interrupt(Interrupt::TxDs, String::from("TX_DS")));
        assert!(display_interrupt(Interrupt::MaxRt, String::from("MAX_RT")));
        assert!(display_interrupt(Interrupt::TxFull, String::from("TX_FULL")));
    }

    #[test]
    fn tx_state_cell() {
        let cell = TxState::new();
        assert_eq!(cell.get(), TxResult::Pending);
        cell.set(TxResult::Done);
        assert_eq!(cell.get(), TxResult::Done);
        cell.set(TxResult::Failed);
        assert_eq!(cell.get(), TxResult::Failed);
        assert_eq!(format!("{}", cell.get()), String::from("failed"));
    }

    #[test]
    fn status_flags_from_bits() {
        let flags = StatusFlags::from_bits(0x4E);
        assert!(flags.rx_dr());
        assert!(!flags.tx_ds());
        assert!(!flags.max_rt());
        assert_eq!(flags.rx_pipe(), 7);
        assert!(!flags.tx_full());
        assert_eq!(
            format!("{flags}"),
            String::from("StatusFlags rx_dr: true, tx_ds: false, max_rt: false")
        );
    }

    #[test]
    fn fifo_status_from_bits() {
        let status = FifoStatus::from_bits(0x11);
        assert!(status.tx_empty());
        assert!(!status.tx_full());
        assert!(!status.tx_reuse());
        assert!(status.rx_empty());
        assert!(!status.rx_full());
        assert_eq!(
            format!("{status}"),
            String::from("FifoStatus tx_empty: true, tx_full: false, rx_empty: true, rx_full: false")
        );
    }
}
