/*
 *  display/transport/mock.rs
 *
 *  oledgfx - monochrome page-packed graphics
 *  (c) 2020-26 Stuart Hunter
 *
 *  Mock transport for testing without hardware
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use std::sync::{Arc, Mutex, MutexGuard};

use crate::display::error::DisplayError;
use crate::display::traits::DisplayTransport;

/// Mock transport for testing
///
/// Records everything a driver sends so tests can check the exact
/// command stream and flushed frames without a bus. State lives behind
/// an `Arc<Mutex<_>>` so a clone handed to the driver and the one kept
/// by the test see the same record.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockTransportState>>,
}

/// Internal state for the mock transport (shared for inspection in tests)
#[derive(Debug, Default)]
pub struct MockTransportState {
    /// Number of times init() was called
    pub init_count: usize,

    /// Every command byte, in order
    pub commands: Vec<u8>,

    /// Every flushed block, header byte included
    pub flushes: Vec<Vec<u8>>,

    /// Total bytes pushed through flush()
    pub bytes_written: usize,

    /// Simulate failures (for error testing)
    pub simulate_init_failure: bool,
    pub simulate_command_failure: bool,
    pub simulate_flush_failure: bool,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get reference to state for inspection in tests
    pub fn state(&self) -> Arc<Mutex<MockTransportState>> {
        Arc::clone(&self.state)
    }

    fn lock(&self) -> Result<MutexGuard<'_, MockTransportState>, DisplayError> {
        self.state
            .lock()
            .map_err(|_| DisplayError::Transport("mock state poisoned".to_string()))
    }

    /// Reset the record and failure switches
    pub fn reset(&self) -> Result<(), DisplayError> {
        *self.lock()? = MockTransportState::default();
        Ok(())
    }

    /// Copy of the command bytes sent so far
    pub fn commands(&self) -> Vec<u8> {
        self.lock().map(|s| s.commands.clone()).unwrap_or_default()
    }

    /// Copy of the most recent flushed block
    pub fn last_flush(&self) -> Option<Vec<u8>> {
        self.lock().ok().and_then(|s| s.flushes.last().cloned())
    }

    pub fn flush_count(&self) -> usize {
        self.lock().map(|s| s.flushes.len()).unwrap_or(0)
    }
}

impl DisplayTransport for MockTransport {
    fn init(&mut self) -> Result<(), DisplayError> {
        let mut state = self.lock()?;
        if state.simulate_init_failure {
            return Err(DisplayError::Transport("Simulated init failure".to_string()));
        }
        state.init_count += 1;
        Ok(())
    }

    fn write_command(&mut self, cmd: u8) -> Result<(), DisplayError> {
        let mut state = self.lock()?;
        if state.simulate_command_failure {
            return Err(DisplayError::Transport("Simulated command failure".to_string()));
        }
        state.commands.push(cmd);
        Ok(())
    }

    fn flush(&mut self, buffer: &[u8]) -> Result<(), DisplayError> {
        let mut state = self.lock()?;
        if state.simulate_flush_failure {
            return Err(DisplayError::Transport("Simulated flush failure".to_string()));
        }
        state.bytes_written += buffer.len();
        state.flushes.push(buffer.to_vec());
        Ok(())
    }
}
