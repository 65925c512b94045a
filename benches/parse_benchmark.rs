//! Benchmarks for docx2txt extraction performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks test parsing and joining at various document sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::io::Cursor;

/// Creates a synthetic DOCX document with the given number of paragraphs.
fn create_test_docx(paragraph_count: usize) -> Vec<u8> {
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    let mut buffer = Vec::new();
    let mut zip = ZipWriter::new(Cursor::new(&mut buffer));

    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    let mut content = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>"#,
    );

    for i in 0..paragraph_count {
        content.push_str(&format!(
            r#"
    <w:p>
      <w:r>
        <w:t>This is paragraph {} with some </w:t>
      </w:r>
      <w:r>
        <w:rPr><w:b/></w:rPr>
        <w:t>test content for benchmarking purposes.</w:t>
      </w:r>
    </w:p>"#,
            i
        ));
    }

    content.push_str(
        r#"
  </w:body>
</w:document>"#,
    );

    zip.start_file("word/document.xml", options).unwrap();
    zip.write_all(content.as_bytes()).unwrap();

    zip.finish().unwrap();
    buffer
}

/// Benchmark package opening and body parsing at various sizes.
fn bench_docx_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("docx_parsing");

    for para_count in [10, 100, 500, 1000].iter() {
        let data = create_test_docx(*para_count);
        let size = data.len() as u64;

        group.throughput(Throughput::Bytes(size));
        group.bench_with_input(
            BenchmarkId::new("paragraphs", para_count),
            &data,
            |b, data| {
                b.iter(|| {
                    let _ = docx2txt::parse_bytes(black_box(data));
                });
            },
        );
    }

    group.finish();
}

/// Benchmark flattening a parsed tree into newline-joined text.
fn bench_text_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_extraction");

    for para_count in [10, 100, 500, 1000].iter() {
        let data = create_test_docx(*para_count);
        let document = docx2txt::parse_bytes(&data).unwrap();

        group.bench_with_input(
            BenchmarkId::new("paragraphs", para_count),
            &document,
            |b, doc| {
                b.iter(|| {
                    let _ = docx2txt::render::document_to_text(black_box(doc));
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_docx_parsing, bench_text_extraction);
criterion_main!(benches);
