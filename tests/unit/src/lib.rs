//! Unit tests for the phonetic password workspace.

#[cfg(test)]
mod tests;
