//! Host fakes for tests

use std::string::String;
use std::vec::Vec;

use meridian_hal::{DateTime, Event, FileStore, Movement, StorageError};

/// File store backed by memory, counting every call
#[derive(Debug, Default)]
pub struct MemoryFiles {
    files: Vec<(String, Vec<u8>)>,
    reads: usize,
    writes: usize,
    fail_writes: bool,
}

impl MemoryFiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, data: &[u8]) {
        match self.files.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = data.to_vec(),
            None => self.files.push((String::from(name), data.to_vec())),
        }
    }

    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.files
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, data)| data.as_slice())
    }

    /// Read calls so far
    pub fn reads(&self) -> usize {
        self.reads
    }

    /// Write calls so far, failed ones included
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }
}

impl FileStore for MemoryFiles {
    fn exists(&mut self, name: &str) -> bool {
        self.get(name).is_some()
    }

    fn read(&mut self, name: &str, buffer: &mut [u8]) -> Result<usize, StorageError> {
        self.reads += 1;
        let data = self.get(name).ok_or(StorageError::NotFound)?;
        if data.len() != buffer.len() {
            return Err(StorageError::SizeMismatch);
        }
        buffer.copy_from_slice(data);
        Ok(buffer.len())
    }

    fn write(&mut self, name: &str, data: &[u8]) -> Result<(), StorageError> {
        self.writes += 1;
        if self.fail_writes {
            return Err(StorageError::Io);
        }
        self.insert(name, data);
        Ok(())
    }
}

/// Host loop fake recording every control call
#[derive(Debug)]
pub struct FakeMovement {
    /// Time handed out for every zone
    pub now: DateTime,
    /// Value returned by the default loop handler
    pub default_result: bool,
    pub tick_requests: Vec<u8>,
    pub next_face_requests: usize,
    pub face_requests: Vec<u8>,
    pub default_handled: Vec<Event>,
    pub zone_queries: Vec<u8>,
}

impl FakeMovement {
    pub fn new(now: DateTime) -> Self {
        Self {
            now,
            default_result: false,
            tick_requests: Vec::new(),
            next_face_requests: 0,
            face_requests: Vec::new(),
            default_handled: Vec::new(),
            zone_queries: Vec::new(),
        }
    }
}

impl Movement for FakeMovement {
    fn request_tick_frequency(&mut self, hz: u8) {
        self.tick_requests.push(hz);
    }

    fn move_to_next_face(&mut self) {
        self.next_face_requests += 1;
    }

    fn move_to_face(&mut self, index: u8) {
        self.face_requests.push(index);
    }

    fn default_loop_handler(&mut self, event: Event) -> bool {
        self.default_handled.push(event);
        self.default_result
    }

    fn date_time_in_zone(&mut self, zone: u8) -> DateTime {
        self.zone_queries.push(zone);
        self.now
    }
}
