/// Lexing errors. These are fatal for the whole input: no token is produced.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
	/// Monkey source is ASCII only.
	#[error("unsupported character '{character}' at byte {position}")]
	UnsupportedCharacter {
		/// Byte offset of the offending character.
		position:  usize,
		/// The offending character.
		character: char,
	},
}
