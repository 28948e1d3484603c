// Record type registry and header collaborator.
//
// Guards against registry drift and wrong stream classification.

#[cfg(test)]
mod tests {
    use std::rc::Rc;
    use std::sync::Arc;

    use fcgi_core::constants::{record_ids, FCGI_HEADER_LEN, MAX_CONTENT_LENGTH, MAX_PADDING_LENGTH};
    use fcgi_core::headers::{CurrentRecord, HeaderSource, RecordHeader, RecordType, RequestId, StreamType};
    use fcgi_core::types::HeaderError;

    #[test]
    fn record_type_registry_round_trips() {
        for id in 1u8..=11 {
            let rt = RecordType::try_from_u8(id).unwrap();
            assert_eq!(u8::from(rt), id);
        }
    }

    #[test]
    fn unknown_record_type_is_rejected() {
        assert_eq!(RecordType::try_from_u8(0), Err(HeaderError::UnknownRecordType(0)));
        assert_eq!(RecordType::try_from_u8(12), Err(HeaderError::UnknownRecordType(12)));
        assert_eq!(HeaderError::UnknownRecordType(0xff).to_string(), "unknown record type: 0xff");
    }

    #[test]
    fn only_stream_records_map_to_stream_types() {
        assert_eq!(RecordType::StdIn.stream_type(), Some(StreamType::StdIn));
        assert_eq!(RecordType::StdOut.stream_type(), Some(StreamType::StdOut));
        assert_eq!(RecordType::StdErr.stream_type(), Some(StreamType::StdErr));
        assert_eq!(RecordType::Data.stream_type(), Some(StreamType::Data));

        assert_eq!(
            StreamType::try_from(RecordType::Params),
            Err(HeaderError::NotAStreamRecord(RecordType::Params))
        );
        assert!(RecordType::BeginRequest.stream_type().is_none());
    }

    #[test]
    fn stream_type_ids_match_record_ids() {
        assert_eq!(u8::from(StreamType::StdIn), record_ids::STDIN);
        assert_eq!(u8::from(StreamType::Data), record_ids::DATA);
        for st in StreamType::ALL {
            assert_eq!(st.record_type().stream_type(), Some(st));
        }
    }

    #[test]
    fn only_stdin_ends_on_empty_record() {
        let ending: Vec<_> = StreamType::ALL
            .into_iter()
            .filter(|s| s.ends_on_empty_record())
            .collect();
        assert_eq!(ending, vec![StreamType::StdIn]);
    }

    #[test]
    fn record_header_helpers() {
        let h = RecordHeader::stream(StreamType::StdOut, RequestId(7), 300).with_padding(4);
        assert_eq!(h.record_type, RecordType::StdOut);
        assert_eq!(h.stream_type(), Ok(StreamType::StdOut));
        assert_eq!(h.wire_len(), FCGI_HEADER_LEN + 300 + 4);
        assert!(!h.is_empty());
        assert_eq!(h.declared_content_length(), 300);
        assert_eq!(h.current_request(), RequestId(7));
    }

    #[test]
    fn largest_record_fits_wire_limits() {
        let h = RecordHeader::stream(StreamType::StdIn, RequestId(1), u16::MAX).with_padding(u8::MAX);
        assert_eq!(h.declared_content_length(), MAX_CONTENT_LENGTH);
        assert_eq!(h.padding_length as usize, MAX_PADDING_LENGTH);
        assert_eq!(h.wire_len(), RecordHeader::MAX_WIRE_LEN);
    }

    #[test]
    fn null_request_id_marks_management_records() {
        assert!(RequestId::NULL.is_management());
        assert!(RequestId::default().is_management());
        assert!(!RequestId(1).is_management());
    }

    #[test]
    fn current_record_tracks_latest_header() {
        let first = RecordHeader::stream(StreamType::StdIn, RequestId(1), 10);
        let second = RecordHeader::stream(StreamType::StdIn, RequestId(2), 0);
        let current = CurrentRecord::new(first);

        assert_eq!(current.declared_content_length(), 10);
        assert_eq!(current.begin(second), first);
        assert_eq!(current.get(), second);
        assert_eq!(current.current_request(), RequestId(2));
    }

    #[test]
    fn smart_pointers_forward_to_source() {
        let h = RecordHeader::stream(StreamType::Data, RequestId(3), 12);
        let rc = Rc::new(CurrentRecord::new(h));
        let arc = Arc::new(h);
        let boxed: Box<dyn HeaderSource> = Box::new(h);

        assert_eq!(rc.declared_content_length(), 12);
        assert_eq!(arc.current_request(), RequestId(3));
        assert_eq!(boxed.declared_content_length(), 12);
    }
}
