#![doc = include_str!("../README.md")]
//!
//! ## Basic API
//!
//! - [`Nrf24l01::new()`](fn@crate::radio::Nrf24l01::new)
//! - [`Nrf24l01::init()`](radio/struct.Nrf24l01.html#method.init)
//! - [`Nrf24l01::deinit()`](radio/struct.Nrf24l01.html#method.deinit)
//! - [`Nrf24l01::set_active()`](radio/struct.Nrf24l01.html#method.set_active)
//! - [`Nrf24l01::set_mode()`](radio/struct.Nrf24l01.html#method.set_mode)
//! - [`Nrf24l01::get_mode()`](radio/struct.Nrf24l01.html#method.get_mode)
//! - [`Nrf24l01::set_channel_frequency()`](radio/struct.Nrf24l01.html#method.set_channel_frequency)
//! - [`Nrf24l01::get_channel_frequency()`](radio/struct.Nrf24l01.html#method.get_channel_frequency)
//! - [`Nrf24l01::set_rx_address()`](radio/struct.Nrf24l01.html#method.set_rx_address)
//! - [`Nrf24l01::get_rx_address()`](radio/struct.Nrf24l01.html#method.get_rx_address)
//! - [`Nrf24l01::set_tx_address()`](radio/struct.Nrf24l01.html#method.set_tx_address)
//! - [`Nrf24l01::get_tx_address()`](radio/struct.Nrf24l01.html#method.get_tx_address)
//! - [`Nrf24l01::write_tx_payload()`](radio/struct.Nrf24l01.html#method.write_tx_payload)
//! - [`Nrf24l01::read_rx_payload()`](radio/struct.Nrf24l01.html#method.read_rx_payload)
//! - [`Nrf24l01::send()`](radio/struct.Nrf24l01.html#method.send)
//! - [`Nrf24l01::irq_handler()`](radio/struct.Nrf24l01.html#method.irq_handler)
//!
//! ## Advanced API
//!
//! - [`Nrf24l01::status()`](radio/struct.Nrf24l01.html#method.status)
//! - [`Nrf24l01::nop()`](radio/struct.Nrf24l01.html#method.nop)
//! - [`Nrf24l01::get_interrupt()`](radio/struct.Nrf24l01.html#method.get_interrupt)
//! - [`Nrf24l01::clear_interrupt()`](radio/struct.Nrf24l01.html#method.clear_interrupt)
//! - [`Nrf24l01::get_data_pipe_number()`](radio/struct.Nrf24l01.html#method.get_data_pipe_number)
//! - [`Nrf24l01::get_fifo_status()`](radio/struct.Nrf24l01.html#method.get_fifo_status)
//! - [`Nrf24l01::flush_rx()`](radio/struct.Nrf24l01.html#method.flush_rx)
//! - [`Nrf24l01::flush_tx()`](radio/struct.Nrf24l01.html#method.flush_tx)
//! - [`Nrf24l01::reuse_tx_payload()`](radio/struct.Nrf24l01.html#method.reuse_tx_payload)
//! - [`Nrf24l01::get_rx_payload_width()`](radio/struct.Nrf24l01.html#method.get_rx_payload_width)
//! - [`Nrf24l01::write_payload_with_ack()`](radio/struct.Nrf24l01.html#method.write_payload_with_ack)
//! - [`Nrf24l01::write_payload_with_no_ack()`](radio/struct.Nrf24l01.html#method.write_payload_with_no_ack)
//! - [`Nrf24l01::get_lost_packet_count()`](radio/struct.Nrf24l01.html#method.get_lost_packet_count)
//! - [`Nrf24l01::get_retransmitted_packet_count()`](radio/struct.Nrf24l01.html#method.get_retransmitted_packet_count)
//! - [`Nrf24l01::get_received_power_detector()`](fn@crate::radio::Nrf24l01::get_received_power_detector)
//! - [`Nrf24l01::set_reg()`](radio/struct.Nrf24l01.html#method.set_reg)
//! - [`Nrf24l01::get_reg()`](radio/struct.Nrf24l01.html#method.get_reg)
//! - [`info()`](fn@crate::radio::info)
//!
//! ## Configuration API
//!
//! - [`Nrf24l01::set_config()`](radio/struct.Nrf24l01.html#method.set_config)
//! - [`Nrf24l01::get_config()`](radio/struct.Nrf24l01.html#method.get_config)
//! - [`Nrf24l01::set_send_timeout()`](radio/struct.Nrf24l01.html#method.set_send_timeout)
//! - [`Nrf24l01::set_auto_acknowledgment()`](radio/struct.Nrf24l01.html#method.set_auto_acknowledgment)
//! - [`Nrf24l01::get_auto_acknowledgment()`](radio/struct.Nrf24l01.html#method.get_auto_acknowledgment)
//! - [`Nrf24l01::set_auto_retransmit_delay()`](radio/struct.Nrf24l01.html#method.set_auto_retransmit_delay)
//! - [`Nrf24l01::get_auto_retransmit_delay()`](radio/struct.Nrf24l01.html#method.get_auto_retransmit_delay)
//! - [`Nrf24l01::set_auto_retransmit_count()`](radio/struct.Nrf24l01.html#method.set_auto_retransmit_count)
//! - [`Nrf24l01::get_auto_retransmit_count()`](radio/struct.Nrf24l01.html#method.get_auto_retransmit_count)
//! - [`Nrf24l01::set_payload_with_ack()`](radio/struct.Nrf24l01.html#method.set_payload_with_ack)
//! - [`Nrf24l01::get_payload_with_ack()`](radio/struct.Nrf24l01.html#method.get_payload_with_ack)
//! - [`Nrf24l01::set_tx_payload_with_no_ack()`](radio/struct.Nrf24l01.html#method.set_tx_payload_with_no_ack)
//! - [`Nrf24l01::get_tx_payload_with_no_ack()`](radio/struct.Nrf24l01.html#method.get_tx_payload_with_no_ack)
//! - [`Nrf24l01::set_dynamic_payload()`](radio/struct.Nrf24l01.html#method.set_dynamic_payload)
//! - [`Nrf24l01::get_dynamic_payload()`](radio/struct.Nrf24l01.html#method.get_dynamic_payload)
//! - [`Nrf24l01::set_pipe_dynamic_payload()`](radio/struct.Nrf24l01.html#method.set_pipe_dynamic_payload)
//! - [`Nrf24l01::get_pipe_dynamic_payload()`](radio/struct.Nrf24l01.html#method.get_pipe_dynamic_payload)
//! - [`Nrf24l01::set_pipe_payload_number()`](radio/struct.Nrf24l01.html#method.set_pipe_payload_number)
//! - [`Nrf24l01::get_pipe_payload_number()`](radio/struct.Nrf24l01.html#method.get_pipe_payload_number)
//! - [`Nrf24l01::set_address_width()`](radio/struct.Nrf24l01.html#method.set_address_width)
//! - [`Nrf24l01::get_address_width()`](radio/struct.Nrf24l01.html#method.get_address_width)
//! - [`Nrf24l01::set_rx_pipe()`](radio/struct.Nrf24l01.html#method.set_rx_pipe)
//! - [`Nrf24l01::get_rx_pipe()`](radio/struct.Nrf24l01.html#method.get_rx_pipe)
//! - [`Nrf24l01::set_data_rate()`](radio/struct.Nrf24l01.html#method.set_data_rate)
//! - [`Nrf24l01::get_data_rate()`](radio/struct.Nrf24l01.html#method.get_data_rate)
//! - [`Nrf24l01::set_output_power()`](radio/struct.Nrf24l01.html#method.set_output_power)
//! - [`Nrf24l01::get_output_power()`](radio/struct.Nrf24l01.html#method.get_output_power)
//! - [`Nrf24l01::set_continuous_carrier_transmit()`](fn@crate::radio::Nrf24l01::set_continuous_carrier_transmit)
//! - [`Nrf24l01::get_continuous_carrier_transmit()`](fn@crate::radio::Nrf24l01::get_continuous_carrier_transmit)
//! - [`Nrf24l01::set_force_pll_lock_signal()`](fn@crate::radio::Nrf24l01::set_force_pll_lock_signal)
//! - [`Nrf24l01::get_force_pll_lock_signal()`](fn@crate::radio::Nrf24l01::get_force_pll_lock_signal)
//! - [`auto_retransmit_delay_from_us()`](fn@crate::radio::auto_retransmit_delay_from_us)
//! - [`auto_retransmit_delay_to_us()`](fn@crate::radio::auto_retransmit_delay_to_us)
//!
#![no_std]

mod types;
pub use types::{
    AddressWidth, Config, DataRate, DriverInfo, FifoStatus, Interrupt, IrqEvent, Mode,
    OutputPower, StatusFlags, TxResult, TxState,
};
pub mod radio;
