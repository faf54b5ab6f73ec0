use std::fmt;
use std::fs;
use std::io;

/// Error type for levelset loading.
#[derive(Debug)]
pub enum LevelError {
    /// IO error when reading from file
    Io(io::Error),
    /// The levelset text contained no levels
    NoLevels,
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::Io(err) => write!(f, "IO error: {}", err),
            LevelError::NoLevels => write!(f, "No levels found in levelset"),
        }
    }
}

impl From<io::Error> for LevelError {
    fn from(err: io::Error) -> Self {
        LevelError::Io(err)
    }
}

/// A collection of Sokoban levels in XSB format.
///
/// Levels are kept as raw text: a fresh `Board` is built from the stored
/// string every time its level is started or restarted, which is also what
/// resets the move history.
#[derive(Debug)]
pub struct Levels {
    levels: Vec<String>,
}

impl Levels {
    /// Parse XSB-formatted Sokoban levels from a string.
    ///
    /// The XSB format uses:
    /// - Lines starting with `;` as level separators/comments
    /// - Standard Sokoban characters (#, @, $, ., *, +, space)
    /// - Empty lines between levels (optional)
    ///
    /// Board lines are stored verbatim; no per-level validation happens
    /// here.
    pub fn from_text(contents: &str) -> Result<Self, LevelError> {
        let mut levels = Vec::new();
        let mut current = String::new();

        for line in contents.lines() {
            // Comment lines and blank lines both end the current level
            if line.trim_start().starts_with(';') || line.trim().is_empty() {
                if !current.is_empty() {
                    levels.push(current.trim_end().to_string());
                    current.clear();
                }
                continue;
            }

            current.push_str(line);
            current.push('\n');
        }

        // Don't forget the last level if the text doesn't end with a blank line
        if !current.is_empty() {
            levels.push(current.trim_end().to_string());
        }

        if levels.is_empty() {
            return Err(LevelError::NoLevels);
        }

        Ok(Levels { levels })
    }

    /// Read and parse an XSB levelset file.
    pub fn from_file(path: &str) -> Result<Self, LevelError> {
        let contents = fs::read_to_string(path)?;
        Self::from_text(&contents)
    }

    /// Get the nth level's text (0-indexed).
    pub fn get(&self, index: usize) -> Option<&str> {
        self.levels.get(index).map(|level| level.as_str())
    }

    /// Get the number of levels.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_basic() {
        let level1 = "####
# .#
#  ###
#*@  #
#  $ #
#  ###
####";

        let level2 = "######
#    #
# #@ #
# $* #
# .* #
#    #
######";

        let level3 = "  ####
###  ####
#     $ #
# #  #$ #
# . .#@ #
#########";

        let xsb_content = format!(
            "; 1\n\n{}\n\n; 2\n\n{}\n\n; 3\n\n{}\n",
            level1, level2, level3
        );

        let levels = Levels::from_text(&xsb_content).unwrap();

        assert_eq!(levels.len(), 3);
        assert_eq!(levels.get(0).unwrap(), level1);
        assert_eq!(levels.get(1).unwrap(), level2);
        assert_eq!(levels.get(2).unwrap(), level3);
        assert!(levels.get(3).is_none());
    }

    #[test]
    fn test_from_text_blank_line_separators_only() {
        let xsb_content = "#####\n#@$.#\n#####\n\n####\n#+*#\n####";
        let levels = Levels::from_text(xsb_content).unwrap();

        assert_eq!(levels.len(), 2);
        assert_eq!(levels.get(0).unwrap(), "#####\n#@$.#\n#####");
        assert_eq!(levels.get(1).unwrap(), "####\n#+*#\n####");
    }

    #[test]
    fn test_from_text_no_levels() {
        let xsb_content = "; a levelset with nothing in it\n\n; end\n";
        let result = Levels::from_text(xsb_content);
        assert!(matches!(result.unwrap_err(), LevelError::NoLevels));
    }

    #[test]
    fn test_from_file_no_file() {
        let result = Levels::from_file("nonexistent_file.xsb");
        assert!(matches!(result.unwrap_err(), LevelError::Io(_)));
    }
}
