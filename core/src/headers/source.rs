//! headers/source.rs
//! The header collaborator interface consumed by content decoders.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use crate::headers::types::{RecordHeader, RequestId};

/// Supplies the fields of the record currently being framed.
///
/// `declared_content_length` is read once per record, when a decoder enters
/// its content state.
pub trait HeaderSource {
    fn declared_content_length(&self) -> usize;
    fn current_request(&self) -> RequestId;
}

impl HeaderSource for RecordHeader {
    #[inline]
    fn declared_content_length(&self) -> usize {
        self.content_length as usize
    }

    #[inline]
    fn current_request(&self) -> RequestId {
        self.request_id
    }
}

/// Shared slot holding the header of the record in flight.
///
/// The dispatcher calls `begin` after decoding each header; every content
/// decoder of the connection borrows the same slot.
#[derive(Debug)]
pub struct CurrentRecord {
    slot: Cell<RecordHeader>,
}

impl CurrentRecord {
    pub fn new(header: RecordHeader) -> Self {
        Self { slot: Cell::new(header) }
    }

    /// Install the next record's header and return the previous one.
    pub fn begin(&self, header: RecordHeader) -> RecordHeader {
        self.slot.replace(header)
    }

    #[inline]
    pub fn get(&self) -> RecordHeader {
        self.slot.get()
    }
}

impl HeaderSource for CurrentRecord {
    #[inline]
    fn declared_content_length(&self) -> usize {
        self.slot.get().declared_content_length()
    }

    #[inline]
    fn current_request(&self) -> RequestId {
        self.slot.get().request_id
    }
}

impl<T: HeaderSource + ?Sized> HeaderSource for &T {
    fn declared_content_length(&self) -> usize {
        (**self).declared_content_length()
    }
    fn current_request(&self) -> RequestId {
        (**self).current_request()
    }
}

impl<T: HeaderSource + ?Sized> HeaderSource for Box<T> {
    fn declared_content_length(&self) -> usize {
        (**self).declared_content_length()
    }
    fn current_request(&self) -> RequestId {
        (**self).current_request()
    }
}

impl<T: HeaderSource + ?Sized> HeaderSource for Rc<T> {
    fn declared_content_length(&self) -> usize {
        (**self).declared_content_length()
    }
    fn current_request(&self) -> RequestId {
        (**self).current_request()
    }
}

impl<T: HeaderSource + ?Sized> HeaderSource for Arc<T> {
    fn declared_content_length(&self) -> usize {
        (**self).declared_content_length()
    }
    fn current_request(&self) -> RequestId {
        (**self).current_request()
    }
}
