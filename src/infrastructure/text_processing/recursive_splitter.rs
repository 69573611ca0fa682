use async_trait::async_trait;
use unicode_segmentation::UnicodeSegmentation;

use crate::application::ports::{TextSplitter, TextSplitterError};
use crate::domain::{Chunk, Document};

/// Boundary-preferring splitter: tries paragraph breaks, then sentence
/// bounds, then word bounds before hard-cutting a run of characters.
///
/// Sizes are measured in characters. Fragments are merged greedily up to
/// `chunk_size`, carrying trailing fragments of at most `chunk_overlap`
/// characters into the next chunk. Hard-cut runs produce fixed windows
/// stepping `chunk_size - chunk_overlap`, so consecutive windows share
/// exactly `chunk_overlap` characters.
pub struct RecursiveCharacterSplitter {
    chunk_size: usize,
    chunk_overlap: usize,
}

#[derive(Debug, Clone, Copy)]
enum Boundary {
    Paragraph,
    Sentence,
    Word,
    Character,
}

impl Boundary {
    fn next(self) -> Self {
        match self {
            Boundary::Paragraph => Boundary::Sentence,
            Boundary::Sentence => Boundary::Word,
            Boundary::Word | Boundary::Character => Boundary::Character,
        }
    }
}

/// A piece of source text no longer than `chunk_size`, with its character
/// offset in the original document.
struct Fragment {
    text: String,
    offset: usize,
}

impl RecursiveCharacterSplitter {
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Self {
        if chunk_overlap >= chunk_size {
            // Undefined by the configuration contract; not rejected here.
            tracing::warn!(
                chunk_size,
                chunk_overlap,
                "chunk_overlap >= chunk_size; hard-cut windows will not overlap"
            );
        }
        Self {
            chunk_size,
            chunk_overlap,
        }
    }

    fn window_step(&self) -> usize {
        if self.chunk_size > self.chunk_overlap {
            self.chunk_size - self.chunk_overlap
        } else {
            self.chunk_size.max(1)
        }
    }

    fn split_document(&self, document: &Document) -> Vec<Chunk> {
        let fragments = self.fragment(&document.content, 0, Boundary::Paragraph);
        self.merge(fragments)
            .into_iter()
            .filter(|f| !f.text.trim().is_empty())
            .map(|f| {
                Chunk::new(
                    f.text,
                    document.id,
                    document.metadata.clone(),
                    f.offset,
                )
            })
            .collect()
    }

    /// Recursively breaks `text` into fragments of at most `chunk_size`
    /// characters, preferring the coarsest boundary that fits.
    fn fragment(&self, text: &str, base_offset: usize, boundary: Boundary) -> Vec<Fragment> {
        if text.is_empty() {
            return Vec::new();
        }

        if char_len(text) <= self.chunk_size {
            return vec![Fragment {
                text: text.to_string(),
                offset: base_offset,
            }];
        }

        if let Boundary::Character = boundary {
            return self.hard_cut(text, base_offset);
        }

        let mut fragments = Vec::new();
        let mut consumed = 0;

        for piece in split_at_boundary(text, boundary) {
            let piece_offset = base_offset + consumed;
            consumed += char_len(piece);

            if char_len(piece) <= self.chunk_size {
                fragments.push(Fragment {
                    text: piece.to_string(),
                    offset: piece_offset,
                });
            } else {
                fragments.extend(self.fragment(piece, piece_offset, boundary.next()));
            }
        }

        fragments
    }

    /// Fixed sliding windows over a boundary-free run of characters.
    fn hard_cut(&self, text: &str, base_offset: usize) -> Vec<Fragment> {
        let byte_positions: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        let total = byte_positions.len();
        let step = self.window_step();

        let mut fragments = Vec::new();
        let mut start = 0;

        while start < total {
            let end = (start + self.chunk_size.max(1)).min(total);
            let byte_start = byte_positions[start];
            let byte_end = if end < total {
                byte_positions[end]
            } else {
                text.len()
            };

            fragments.push(Fragment {
                text: text[byte_start..byte_end].to_string(),
                offset: base_offset + start,
            });

            // The window that reaches the end is the last one; stepping
            // further would emit a shorter window nested in this one.
            if end == total {
                break;
            }

            start += step;
        }

        fragments
    }

    /// Greedily packs fragments into chunks of at most `chunk_size`
    /// characters, retaining trailing fragments of at most `chunk_overlap`
    /// characters as the start of the next chunk.
    fn merge(&self, fragments: Vec<Fragment>) -> Vec<Fragment> {
        let mut chunks = Vec::new();
        let mut buffer: Vec<Fragment> = Vec::new();
        let mut buffered_chars = 0;

        for fragment in fragments {
            let fragment_chars = char_len(&fragment.text);

            if buffered_chars + fragment_chars > self.chunk_size && !buffer.is_empty() {
                chunks.push(join_fragments(&buffer));

                while buffered_chars > self.chunk_overlap
                    || (buffered_chars + fragment_chars > self.chunk_size && !buffer.is_empty())
                {
                    let dropped = buffer.remove(0);
                    buffered_chars -= char_len(&dropped.text);
                    if buffer.is_empty() {
                        break;
                    }
                }
            }

            buffered_chars += fragment_chars;
            buffer.push(fragment);
        }

        if !buffer.is_empty() {
            chunks.push(join_fragments(&buffer));
        }

        chunks
    }
}

#[async_trait]
impl TextSplitter for RecursiveCharacterSplitter {
    async fn split(&self, documents: &[Document]) -> Result<Vec<Chunk>, TextSplitterError> {
        let mut chunks = Vec::new();
        for document in documents {
            chunks.extend(self.split_document(document));
        }
        Ok(chunks)
    }
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

fn join_fragments(fragments: &[Fragment]) -> Fragment {
    let mut text = String::new();
    for fragment in fragments {
        text.push_str(&fragment.text);
    }
    Fragment {
        text,
        offset: fragments[0].offset,
    }
}

fn split_at_boundary(text: &str, boundary: Boundary) -> Vec<&str> {
    match boundary {
        Boundary::Paragraph => text.split_inclusive("\n\n").collect(),
        Boundary::Sentence => text.split_sentence_bounds().collect(),
        Boundary::Word => text.split_word_bounds().collect(),
        Boundary::Character => vec![text],
    }
}
