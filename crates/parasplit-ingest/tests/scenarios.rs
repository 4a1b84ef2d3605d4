//! End-to-end chunking scenarios through the public API.

use parasplit_core::{ChunkingConfig, StrategyKind};
use parasplit_ingest::{
    reassemble, split_text, word_count, BoundaryTier, Chunker, Cut, Engine, ParagraphPacker,
    Strategy, PARAGRAPH_DELIMITER,
};

fn paragraph(words: usize) -> String {
    vec!["lorem"; words].join(" ")
}

fn document(word_counts: &[usize]) -> String {
    word_counts
        .iter()
        .map(|&n| paragraph(n))
        .collect::<Vec<_>>()
        .join(PARAGRAPH_DELIMITER)
}

#[test]
fn test_sentence_split() {
    let text = "This is a test sentence. This is another test sentence.";
    let chunks = split_text(text, 6).unwrap();
    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0], "This is a test sentence. ");
    assert_eq!(chunks[1], "This is another test sentence.");

    assert_eq!(split_text(text, 11).unwrap(), vec![text]);
}

#[test]
fn test_clause_split() {
    let text = "One two three four five six, seven height nine. Eleven";
    let chunks = split_text(text, 7).unwrap();
    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0], "One two three four five six,");
    assert_eq!(chunks[1], " seven height nine. Eleven");
}

#[test]
fn test_multi_paragraph_document_packs_greedily() {
    let text = document(&[120, 60, 30, 250, 10, 190, 15]);
    let packer = ParagraphPacker::new(200).unwrap();
    let chunks = packer.chunks(&text);

    let cuts: Vec<Cut> = chunks.iter().map(|c| c.cut).collect();
    assert_eq!(
        cuts,
        vec![
            Cut::Paragraphs(2),
            Cut::Paragraphs(1),
            Cut::Boundary(BoundaryTier::Whitespace),
            Cut::Remainder,
            Cut::Paragraphs(2),
            Cut::Paragraphs(1),
        ]
    );

    let words: Vec<usize> = chunks.iter().map(|c| word_count(&c.text)).collect();
    assert_eq!(words, vec![180, 30, 166, 84, 200, 15]);
    assert!(words.iter().all(|&w| w <= 200));

    // The 250-word paragraph is cut at the last space inside the first 1000 characters.
    assert_eq!(chunks[2].text.chars().count(), 996);
    assert!(chunks[3].text.chars().count() <= 1000);

    assert_eq!(reassemble(&chunks).unwrap(), text);
}

#[test]
fn test_long_prose_prefers_sentence_ends() {
    let sentence = "The quick brown fox jumps over the lazy dog again and again. ";
    let text = sentence.repeat(40);
    let chunks = ParagraphPacker::new(50).unwrap().chunks(text.trim_end());

    assert!(chunks.len() > 1);
    for chunk in &chunks[..chunks.len() - 1] {
        assert_eq!(chunk.cut, Cut::Boundary(BoundaryTier::SentenceEnd));
        assert!(chunk.text.ends_with(". "));
        assert!(chunk.text.chars().count() <= 250);
    }
    assert_eq!(chunks.last().unwrap().cut, Cut::Remainder);
    assert_eq!(reassemble(&chunks).unwrap(), text.trim_end());
}

#[test]
fn test_strategies_agree_on_small_input() {
    let text = "A short note.\n\nWith two paragraphs.";
    for strategy in [Strategy::Character, Strategy::Paragraph] {
        assert_eq!(strategy.chunk(text, 200).unwrap(), vec![text]);
    }
}

#[test]
fn test_strategies_agree_on_empty_input() {
    for strategy in [Strategy::Character, Strategy::Paragraph] {
        assert_eq!(strategy.chunk("", 200).unwrap(), vec![String::new()]);
    }
}

#[test]
fn test_chunking_is_deterministic() {
    let text = document(&[40, 300, 5, 5, 199, 201]);
    let engine = Engine::new(ChunkingConfig::new(StrategyKind::Paragraph, 200).unwrap()).unwrap();
    let first = engine.run(&text).unwrap();
    let second = engine.run(&text).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_chunk_records_serialize() {
    let chunks = ParagraphPacker::new(3).unwrap().chunks("a b\n\nc d");
    let json = serde_json::to_value(&chunks).unwrap();
    assert_eq!(json[0]["text"], "a b");
    assert_eq!(json[0]["chunk_index"], 0);
    assert_eq!(json[1]["total_chunks"], 2);
    assert_eq!(json[1]["start"], 5);
    assert_eq!(json[1]["cut"]["kind"], "paragraphs");
}
