use crate::error::{CodonError, CodonResult};
use crate::seq::record::SeqRecord;
use crate::seq::traits::SeqBytes;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Cursor, Write};
use std::marker::PhantomData;
use std::path::Path;

pub const DEFAULT_LINE_WIDTH: usize = 80;

pub struct FastaRecords<R, S> {
    reader: R,
    line_no: usize,
    pending_header: Option<(String, usize)>,
    buf_line: String,
    seq_buf: Vec<u8>,
    _marker: PhantomData<S>,
}

impl<R: BufRead, S: SeqBytes> FastaRecords<R, S> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_no: 0,
            pending_header: None,
            buf_line: String::new(),
            seq_buf: Vec::new(),
            _marker: PhantomData,
        }
    }

    fn next_header(&mut self) -> Option<CodonResult<(String, usize)>> {
        if let Some(pending) = self.pending_header.take() {
            return Some(Ok(pending));
        }

        loop {
            self.buf_line.clear();
            match self.reader.read_line(&mut self.buf_line) {
                Ok(0) => return None,
                Ok(_) => {
                    self.line_no += 1;
                    let line_no = self.line_no;
                    if self.buf_line.starts_with('>') {
                        return Some(Ok((self.buf_line.clone(), line_no)));
                    }
                    if self.buf_line.trim().is_empty() {
                        continue;
                    }
                    return Some(Err(CodonError::FastaFormat {
                        msg: "expected header line starting with '>'",
                        line: line_no,
                    }));
                }
                Err(err) => return Some(Err(CodonError::Io(err))),
            }
        }
    }
}

impl<R: BufRead, S: SeqBytes> Iterator for FastaRecords<R, S> {
    type Item = CodonResult<SeqRecord<S>>;

    fn next(&mut self) -> Option<Self::Item> {
        let (header_line, header_line_no) = match self.next_header()? {
            Ok(header) => header,
            Err(err) => return Some(Err(err)),
        };

        let (id, desc) = match parse_header(&header_line, header_line_no) {
            Ok(parsed) => parsed,
            Err(err) => return Some(Err(err)),
        };

        self.seq_buf.clear();

        loop {
            self.buf_line.clear();
            match self.reader.read_line(&mut self.buf_line) {
                Ok(0) => break,
                Ok(_) => {
                    self.line_no += 1;
                    let line_no = self.line_no;
                    if self.buf_line.starts_with('>') {
                        self.pending_header = Some((self.buf_line.clone(), line_no));
                        break;
                    }
                    for b in self.buf_line.bytes() {
                        if !b.is_ascii_whitespace() {
                            self.seq_buf.push(b);
                        }
                    }
                }
                Err(err) => return Some(Err(CodonError::Io(err))),
            }
        }

        let capacity = self.seq_buf.capacity();
        let bytes = std::mem::take(&mut self.seq_buf);
        let seq = match S::from_bytes(bytes) {
            Ok(seq) => seq,
            Err(err) => return Some(Err(err.in_record(&id))),
        };
        self.seq_buf = Vec::with_capacity(capacity);

        Some(Ok(SeqRecord { id, desc, seq }))
    }
}

pub fn fasta_records_from_reader<R: BufRead, S: SeqBytes>(reader: R) -> FastaRecords<R, S> {
    FastaRecords::new(reader)
}

pub fn read_fasta_records_from_reader<R: BufRead, S: SeqBytes>(
    reader: R,
) -> CodonResult<Vec<SeqRecord<S>>> {
    fasta_records_from_reader(reader).collect()
}

pub fn read_fasta_records_from_path<S: SeqBytes>(
    path: impl AsRef<Path>,
) -> CodonResult<Vec<SeqRecord<S>>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    read_fasta_records_from_reader(reader)
}

pub fn read_fasta_records_from_bytes<S: SeqBytes>(data: &[u8]) -> CodonResult<Vec<SeqRecord<S>>> {
    let reader = BufReader::new(Cursor::new(data));
    read_fasta_records_from_reader(reader)
}

/// Write `>id description` headers with sequence lines wrapped at
/// `line_width` (0 writes each sequence on one line).
pub fn write_fasta_records<W: Write, S: SeqBytes>(
    writer: &mut W,
    records: &[SeqRecord<S>],
    line_width: usize,
) -> CodonResult<()> {
    for record in records {
        match record.desc() {
            Some(desc) => writeln!(writer, ">{} {}", record.id(), desc)?,
            None => writeln!(writer, ">{}", record.id())?,
        }
        let bytes = record.seq().as_bytes();
        if line_width == 0 {
            writer.write_all(bytes)?;
            writer.write_all(b"\n")?;
        } else {
            for line in bytes.chunks(line_width) {
                writer.write_all(line)?;
                writer.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}

pub fn write_fasta_records_to_path<S: SeqBytes>(
    path: impl AsRef<Path>,
    records: &[SeqRecord<S>],
    line_width: usize,
) -> CodonResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_fasta_records(&mut writer, records, line_width)?;
    writer.flush()?;
    Ok(())
}

fn parse_header(header_line: &str, line_no: usize) -> CodonResult<(Box<str>, Option<Box<str>>)> {
    let header = header_line.strip_prefix('>').ok_or(CodonError::FastaFormat {
        msg: "expected header line starting with '>'",
        line: line_no,
    })?;

    let header = header.trim_end_matches(&['\n', '\r'][..]).trim_start();
    if header.is_empty() {
        return Err(CodonError::FastaFormat {
            msg: "empty header",
            line: line_no,
        });
    }

    let (id, desc) = match header.find(|c: char| c.is_whitespace()) {
        Some(idx) => {
            let id = &header[..idx];
            let desc = header[idx..].trim();
            let desc = if desc.is_empty() { None } else { Some(desc) };
            (id, desc)
        }
        None => (header, None),
    };

    Ok((id.into(), desc.map(|s| s.into())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::{CodingSeq, ProteinSeq};

    #[test]
    fn parse_single_record() {
        let data = b">seq1\nACGT\n";
        let records = read_fasta_records_from_bytes::<Vec<u8>>(data).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id(), "seq1");
        assert_eq!(records[0].desc(), None);
        assert_eq!(records[0].seq().as_slice(), b"ACGT");
    }

    #[test]
    fn header_with_description() {
        let data = b">seq1 some desc here\nAT\nGAAA\n";
        let records = read_fasta_records_from_bytes::<CodingSeq>(data).unwrap();
        assert_eq!(records[0].id(), "seq1");
        assert_eq!(records[0].desc(), Some("some desc here"));
        assert_eq!(records[0].seq().as_bytes(), b"ATGAAA");
    }

    #[test]
    fn multiple_records_and_blank_lines() {
        let data = b"\n>seq1\nMK\n\n>seq2\nRW*\n";
        let records = read_fasta_records_from_bytes::<ProteinSeq>(data).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id(), "seq1");
        assert_eq!(records[1].id(), "seq2");
        assert_eq!(records[1].seq().as_bytes(), b"RW");
    }

    #[test]
    fn empty_sequence_allowed() {
        let data = b">seq1\n>seq2\nATG\n";
        let records = read_fasta_records_from_bytes::<CodingSeq>(data).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[0].seq().is_empty());
    }

    #[test]
    fn invalid_format_before_header() {
        let data = b"ACGT\n>seq1\nAC\n";
        let err = read_fasta_records_from_bytes::<Vec<u8>>(data).unwrap_err();
        match err {
            CodonError::FastaFormat { line, .. } => assert_eq!(line, 1),
            other => panic!("expected fasta format error, got {other:?}"),
        }
    }

    #[test]
    fn invalid_sequence_names_record() {
        let data = b">good\nATG\n>bad\nATGA\n";
        let err = read_fasta_records_from_bytes::<CodingSeq>(data).unwrap_err();
        match err {
            CodonError::InvalidRecord { id, source } => {
                assert_eq!(id, "bad");
                assert!(matches!(*source, CodonError::InvalidLength { len: 4 }));
            }
            other => panic!("expected record error, got {other:?}"),
        }
    }

    #[test]
    fn writer_wraps_lines() {
        let records = vec![
            SeqRecord::new("a", b"ATGAAACGC".to_vec()).with_desc("optimized"),
            SeqRecord::new("b", b"TGG".to_vec()),
        ];
        let mut out = Vec::new();
        write_fasta_records(&mut out, &records, 4).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            ">a optimized\nATGA\nAACG\nC\n>b\nTGG\n"
        );

        let mut out = Vec::new();
        write_fasta_records(&mut out, &records, 0).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            ">a optimized\nATGAAACGC\n>b\nTGG\n"
        );
    }

    #[test]
    fn write_then_read_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.fasta");
        let records = vec![SeqRecord::new(
            "orf1",
            CodingSeq::new(b"ATGAAACGCTGG".to_vec()).unwrap(),
        )];
        write_fasta_records_to_path(&path, &records, DEFAULT_LINE_WIDTH).unwrap();
        let back = read_fasta_records_from_path::<CodingSeq>(&path).unwrap();
        assert_eq!(back, records);
    }
}
