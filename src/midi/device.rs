//! MIDI output device handling
//!
//! Enumeration and connection to MIDI output ports (hardware and virtual)
//! via midir. The open connection is the transport sink the runner sends
//! through.

use midir::{MidiOutput, MidiOutputConnection};

use super::runner::MidiSink;
use super::Error;

/// Information about a MIDI output port
#[derive(Debug, Clone)]
pub struct MidiPortInfo {
    /// Port index (for connection)
    pub index: usize,
    /// Port name
    pub name: String,
}

/// Manages a single MIDI output connection
pub struct MidiOutputManager {
    /// Active connection, if any (must be kept alive while sending)
    connection: Option<MidiOutputConnection>,
    /// Name of the connected port
    port_name: Option<String>,
}

impl MidiOutputManager {
    pub fn new() -> Self {
        Self {
            connection: None,
            port_name: None,
        }
    }

    /// List available MIDI output ports. An empty list is not an error;
    /// it just means there is nothing to send to.
    pub fn list_ports(&self) -> Result<Vec<MidiPortInfo>, Error> {
        let midi_out = MidiOutput::new("miditester-enumerate")?;

        let ports = midi_out.ports();
        let mut infos = Vec::with_capacity(ports.len());
        for (index, port) in ports.iter().enumerate() {
            let name = midi_out
                .port_name(port)
                .unwrap_or_else(|_| format!("Unknown Port {}", index));
            infos.push(MidiPortInfo { index, name });
        }
        Ok(infos)
    }

    /// Open the MIDI output port with the given index, closing any
    /// previously open connection first.
    pub fn connect(&mut self, port_index: usize) -> Result<(), Error> {
        self.disconnect();

        let midi_out = MidiOutput::new("miditester")?;

        let ports = midi_out.ports();
        let port = ports
            .get(port_index)
            .ok_or(Error::PortOutOfRange(port_index))?;

        let port_name = midi_out
            .port_name(port)
            .unwrap_or_else(|_| format!("Port {}", port_index));

        log::info!("opening MIDI port: {}", port_name);
        let connection = midi_out
            .connect(port, "miditester-out")
            .map_err(|e| Error::Connect(e.to_string()))?;

        self.connection = Some(connection);
        self.port_name = Some(port_name);
        Ok(())
    }

    /// Close the connection. Safe to call when nothing is open.
    pub fn disconnect(&mut self) {
        if let Some(connection) = self.connection.take() {
            if let Some(name) = self.port_name.take() {
                log::info!("closing MIDI port: {}", name);
            }
            connection.close();
        }
        self.port_name = None;
    }

    /// Whether a port is currently open
    pub fn is_connected(&self) -> bool {
        self.connection.is_some()
    }

    /// Name of the open port, if any
    pub fn connected_port_name(&self) -> Option<String> {
        self.port_name.clone()
    }
}

impl MidiSink for MidiOutputManager {
    fn send(&mut self, message: &[u8]) -> Result<(), Error> {
        let connection = self.connection.as_mut().ok_or(Error::NotConnected)?;
        connection.send(message)?;
        Ok(())
    }
}

impl Default for MidiOutputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for MidiOutputManager {
    fn drop(&mut self) {
        self.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manager_creation() {
        let manager = MidiOutputManager::new();
        assert!(!manager.is_connected());
        assert!(manager.connected_port_name().is_none());
    }

    #[test]
    fn test_list_ports() {
        let manager = MidiOutputManager::new();
        // Must not fail even with no ports present
        let result = manager.list_ports();
        assert!(result.is_ok());
    }

    #[test]
    fn test_send_without_connection() {
        let mut manager = MidiOutputManager::new();
        assert!(matches!(
            manager.send(&[0xF8]),
            Err(Error::NotConnected)
        ));
    }
}
