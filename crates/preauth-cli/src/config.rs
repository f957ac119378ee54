use std::path::Path;

use eyre::WrapErr;
use preauth_rules::lexicon::Lexicon;

/// Load the lexicon from `path`, or fall back to the built-in table.
///
/// Older lexicon files are migrated in memory. The file itself is left
/// untouched; `preauth lexicon --lexicon <file>` prints the migrated form.
pub fn load_lexicon(path: Option<&Path>) -> eyre::Result<Lexicon> {
    let Some(path) = path else {
        tracing::info!(version = preauth_rules::lexicon::CURRENT_VERSION, "using built-in lexicon");
        return Ok(Lexicon::canonical());
    };

    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read lexicon at {}: {e}", path.display()))?;
    let lexicon = Lexicon::from_json(&contents)
        .wrap_err_with(|| format!("invalid lexicon {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        version = lexicon.lexicon_version,
        "loaded lexicon"
    );
    Ok(lexicon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_means_canonical() {
        assert_eq!(load_lexicon(None).unwrap(), Lexicon::canonical());
    }

    #[test]
    fn file_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.json");
        std::fs::write(&path, Lexicon::canonical().to_json_pretty().unwrap()).unwrap();

        assert_eq!(load_lexicon(Some(path.as_path())).unwrap(), Lexicon::canonical());
    }

    #[test]
    fn errors_name_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = load_lexicon(Some(path.as_path())).unwrap_err();
        assert!(format!("{err}").contains("broken.json"));

        let missing = dir.path().join("missing.json");
        assert!(load_lexicon(Some(missing.as_path())).is_err());
    }
}
