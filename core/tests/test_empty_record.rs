// Zero-length records: only stdin treats them as end-of-stream.

#[cfg(test)]
mod tests {
    use fcgi_core::headers::{RecordHeader, RequestId, StreamType};
    use fcgi_core::stream::{ContentCollector, DecoderState, InputBuffer, StreamContentDecoder};

    fn empty_header(stream_type: StreamType) -> RecordHeader {
        RecordHeader::stream(stream_type, RequestId(9), 0)
    }

    #[test]
    fn stdin_empty_record_signals_end_once() {
        let collector = ContentCollector::new();
        let mut dec = StreamContentDecoder::new(empty_header(StreamType::StdIn), StreamType::StdIn, &collector);

        dec.handle_empty_record();

        assert_eq!(collector.end_count(), 1);
        assert_eq!(collector.chunk_count(), 0);
        assert!(collector.is_ended(RequestId(9)));
        assert_eq!(dec.counters().end_signals, 1);
        assert_eq!(dec.counters().empty_records, 1);
    }

    #[test]
    fn other_streams_ignore_empty_records() {
        for st in [StreamType::StdOut, StreamType::StdErr, StreamType::Data] {
            let collector = ContentCollector::new();
            let mut dec = StreamContentDecoder::new(empty_header(st), st, &collector);

            dec.handle_empty_record();

            assert_eq!(collector.end_count(), 0, "{st}");
            assert_eq!(collector.chunk_count(), 0, "{st}");
            assert_eq!(dec.counters().end_signals, 0);
            assert_eq!(dec.counters().empty_records, 1);
        }
    }

    #[test]
    fn empty_record_leaves_state_machine_alone() {
        let collector = ContentCollector::new();
        let header = RecordHeader::stream(StreamType::StdIn, RequestId(1), 8);
        let mut dec = StreamContentDecoder::new(header, StreamType::StdIn, &collector);

        let mut buf = InputBuffer::new(b"half");
        assert!(!dec.decode(&mut buf));
        assert_eq!(dec.remaining(), 4);

        dec.handle_empty_record();
        assert_eq!(dec.state(), DecoderState::ConsumingContent);
        assert_eq!(dec.remaining(), 4);

        let mut rest = InputBuffer::new(b"done");
        assert!(dec.decode(&mut rest));
        assert_eq!(
            collector.content(RequestId(1), StreamType::StdIn).unwrap().as_ref(),
            b"halfdone"
        );
    }

    #[test]
    fn stdin_body_then_end() {
        let collector = ContentCollector::new();
        let body = RecordHeader::stream(StreamType::StdIn, RequestId(2), 5);
        let mut dec = StreamContentDecoder::new(body, StreamType::StdIn, &collector);

        let mut buf = InputBuffer::new(b"a=1&b");
        assert!(dec.decode(&mut buf));
        assert!(!collector.is_ended(RequestId(2)));

        dec.handle_empty_record();
        assert!(collector.is_ended(RequestId(2)));

        let drained = collector.drain_request(RequestId(2)).unwrap();
        assert_eq!(drained.len(), 1);
        assert_eq!(drained[0].0, StreamType::StdIn);
        assert_eq!(drained[0].1.as_ref(), b"a=1&b");
        assert!(!collector.is_ended(RequestId(2)));
    }
}
