use super::*;
use crate::bit::BitVecExt;
use crate::error::{HuffmanError, Malformed};
use proptest::prelude::*;

fn bits(s: &str) -> BitVec {
  BitVec::from_bit_str(s).unwrap()
}

fn pangram() -> Vec<u8> {
  (0..=255u8).collect()
}

#[test]
fn compress_reports_bad_input() {
  assert_eq!(Err(HuffmanError::EmptyInput), compress(b""));
  assert_eq!(
    Err(HuffmanError::InsufficientAlphabet { distinct: 1 }),
    compress(b"A")
  );
  assert_eq!(
    Err(HuffmanError::InsufficientAlphabet { distinct: 1 }),
    compress(b"AAAA")
  );
}

#[test]
fn compress_small_sample() -> Result<()> {
  let archive = compress(b"ABANANAABANDANA")?;
  assert_eq!(bits("1110000"), archive.tree_bits);
  assert_eq!(b"DBNA".to_vec(), archive.tree_leaves);
  assert_eq!(bits("1001101101110011010001011"), archive.message_bits);
  assert_eq!(7 + 4 * 8 + 25, archive.total_bits());
  Ok(())
}

#[test]
fn decompress_small_sample() -> Result<()> {
  let archive = Archive {
    tree_bits: bits("1011010010100"),
    tree_leaves: b"ukpnamh".to_vec(),
    message_bits: bits(concat!(
      "111101110011110111",
      "001011010001011010",
      "0011010100110110",
    )),
  };
  assert_eq!(b"humuhumunukunukuapuaa".to_vec(), decompress(&archive)?);
  Ok(())
}

#[test]
fn decompress_undoes_compress_on_samples() -> Result<()> {
  let samples: Vec<Vec<u8>> = vec![
    b"THAT THAT IS IS THAT THAT IS NOT IS NOT IS THAT IT IT IS".to_vec(),
    b"AABAAABBABAAABAAAA".to_vec(),
    b":-) :-D XD <(^_^)>".to_vec(),
    pangram(),
  ];

  for text in samples {
    let archive = compress(&text)?;
    let result = decompress(&archive)?;
    assert_eq!(text.len(), result.len());
    assert!(text == result);
  }
  Ok(())
}

#[test]
fn decompress_rejects_mismatched_tree() -> Result<()> {
  let mut archive = compress(b"ABBCCCC")?;
  archive.tree_bits = bits("1100");
  assert_eq!(
    Err(HuffmanError::MalformedStream(Malformed::TruncatedTree)),
    decompress(&archive)
  );
  Ok(())
}

#[test]
fn decompress_rejects_stray_message_bits() -> Result<()> {
  let mut archive = compress(b"ABBCCCC")?;
  // A lone 0 bit leads into the internal node holding A and B.
  archive.message_bits.push(false);
  assert_eq!(
    Err(HuffmanError::MalformedStream(Malformed::TruncatedCode)),
    decompress(&archive)
  );
  Ok(())
}

#[test]
fn decompress_rejects_long_leaf_sequences() {
  let n = 1_000_000;
  let archive = Archive {
    tree_bits: std::iter::repeat(true)
      .take(n - 1)
      .chain(std::iter::repeat(false).take(n))
      .collect(),
    tree_leaves: (0..n).map(|i| i as u8).collect(),
    message_bits: BitVec::new(),
  };
  assert_eq!(
    Err(HuffmanError::MalformedStream(Malformed::DuplicateLeaf(0))),
    decompress(&archive)
  );
}

#[test]
fn json_form_uses_bit_strings() -> anyhow::Result<()> {
  let archive = compress(b"ABBCCCC")?;
  let json = serde_json::to_string(&archive)?;
  assert_eq!(
    r#"{"tree-bits":"11000","tree-leaves":[65,66,67],"message-bits":"0001011111"}"#,
    json
  );
  let parsed: Archive = serde_json::from_str(&json)?;
  assert_eq!(archive, parsed);
  Ok(())
}

#[test]
fn yaml_form_round_trips() -> anyhow::Result<()> {
  let archive = compress(b"humuhumunukunukuapuaa")?;
  let yaml = serde_yaml::to_string(&archive)?;
  let parsed: Archive = serde_yaml::from_str(&yaml)?;
  assert_eq!(archive, parsed);
  Ok(())
}

#[test]
fn json_form_rejects_bad_digits() {
  let json = r#"{"tree-bits":"1102","tree-leaves":[65,66],"message-bits":""}"#;
  assert!(serde_json::from_str::<Archive>(json).is_err());
}

proptest! {
  #[test]
  fn prop_decompress_inverts_compress(
    text in proptest::collection::vec(any::<u8>(), 1..500)
  ) {
    match compress(&text) {
      Ok(archive) => prop_assert_eq!(text, decompress(&archive).unwrap()),
      Err(e) => prop_assert_eq!(HuffmanError::InsufficientAlphabet { distinct: 1 }, e),
    }
  }

  #[test]
  fn prop_message_is_no_longer_than_fixed_width(
    text in proptest::collection::vec(any::<u8>(), 2..500)
  ) {
    prop_assume!(compress(&text).is_ok());
    let archive = compress(&text).unwrap();
    prop_assert!(archive.message_bits.len() <= text.len() * 8);
  }
}
