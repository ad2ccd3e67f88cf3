use std::io::Result;

use scrabble_solver::Lexicon;

#[cfg(feature = "bincode")]
fn serialize_lexicon(lexicon: &Lexicon) -> Result<()> {
    use std::fs::File;
    use std::io::prelude::*;
    let bytes = lexicon.to_bytes().expect("lexicon always serializes");
    let mut file = File::create("wordlists/words.bin")?;
    file.write_all(&bytes)?;
    Ok(())
}

fn main() -> Result<()> {
    let wordfile = "wordlists/words.txt";
    let lexicon = Lexicon::from_file(wordfile).expect("word list should be readable");
    println!("is_word(\"CAT\") = {}", lexicon.is_word("CAT"));
    #[cfg(feature = "bincode")]
    serialize_lexicon(&lexicon)?;
    Ok(())
}
