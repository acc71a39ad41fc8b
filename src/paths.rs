use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error, info, warn};

use super::{Args, MeshError, Options, Result, convert_with};

/// Extension given to files derived inside a directory target.
pub const MESH_EXT: &str = "mesh";

/// Where the output of a lone `-o` goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    File(PathBuf),
    /// Each input `dir/<stem>.mesh`.
    Directory(PathBuf),
}

impl Target {
    /// A lone output is a directory when it must hold more than one file,
    /// ends with a path separator, or already is one.
    pub fn classify(output: &Path, num_inputs: usize) -> Self {
        if num_inputs > 1 || ends_with_separator(output) || output.is_dir() {
            Self::Directory(output.to_path_buf())
        } else {
            Self::File(output.to_path_buf())
        }
    }

    pub fn path_for(&self, input: &Path) -> Result<PathBuf> {
        match self {
            Self::File(p) => Ok(p.clone()),
            Self::Directory(dir) => Ok(dir.join(mesh_file_name(input)?)),
        }
    }
}

fn ends_with_separator(p: &Path) -> bool {
    p.as_os_str()
        .to_string_lossy()
        .ends_with(std::path::is_separator)
}

/// `<stem>.mesh` for an input path.
pub fn mesh_file_name(input: &Path) -> Result<PathBuf> {
    let Some(stem) = input.file_stem() else {
        return Err(MeshError::Config(format!(
            "cannot derive an output name from {}",
            input.display()
        )));
    };
    let mut name = stem.to_os_string();
    name.push(".");
    name.push(MESH_EXT);
    Ok(PathBuf::from(name))
}

/// Pairs every input with its output path. Nothing is written here.
pub fn resolve(inputs: &[PathBuf], outputs: &[PathBuf]) -> Result<Vec<(PathBuf, PathBuf)>> {
    let pairs = match outputs {
        [out] => {
            let target = Target::classify(out, inputs.len());
            debug!("single output target {target:?}");
            inputs
                .iter()
                .map(|i| Ok((i.clone(), target.path_for(i)?)))
                .collect::<Result<Vec<_>>>()?
        }
        outs if outs.len() == inputs.len() => {
            inputs.iter().cloned().zip(outs.iter().cloned()).collect()
        }
        outs => {
            return Err(MeshError::Config(format!(
                "output should be equal to inputs or be one (got {} inputs, {} outputs)",
                inputs.len(),
                outs.len()
            )));
        }
    };

    let mut seen = HashSet::new();
    for (_, o) in &pairs {
        if !seen.insert(o) {
            warn!("{} is written more than once, only the last input is kept", o.display());
        }
    }
    Ok(pairs)
}

/// Reads `input`, converts it fully in memory, then overwrites `output`.
/// Parent directories of `output` must already exist.
pub fn convert_file(input: &Path, output: &Path, opts: &Options) -> Result<()> {
    let text = fs::read_to_string(input).map_err(|e| MeshError::io(input, e))?;
    let mesh = convert_with(&text, opts).inspect_err(|e| {
        error!("failed to convert {}: {e}", input.display());
    })?;
    fs::write(output, mesh).map_err(|e| MeshError::io(output, e))?;
    info!("{} -> {}", input.display(), output.display());
    Ok(())
}

/// Converts every input of `args` in order, stopping at the first failure.
/// Files written before a failure are left in place.
pub fn run(args: &Args) -> Result<()> {
    let pairs = resolve(&args.inputs, &args.outputs)?;
    let opts = args.options();
    for (input, output) in &pairs {
        convert_file(input, output, &opts)?;
    }
    debug!("converted {} file(s)", pairs.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(ps: &[&str]) -> Vec<PathBuf> {
        ps.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn parallel() {
        let pairs = resolve(&paths(&["a.obj", "b.obj"]), &paths(&["x", "y"])).unwrap();
        assert_eq!(
            pairs,
            [
                (PathBuf::from("a.obj"), PathBuf::from("x")),
                (PathBuf::from("b.obj"), PathBuf::from("y")),
            ]
        );
    }

    #[test]
    fn single_file() {
        let pairs = resolve(&paths(&["dir/a.obj"]), &paths(&["does/not/exist.mesh"])).unwrap();
        assert_eq!(pairs[0].1, PathBuf::from("does/not/exist.mesh"));
    }

    #[test]
    fn single_directory() {
        let pairs = resolve(&paths(&["in/a.obj", "b.model.obj", "c"]), &paths(&["out"])).unwrap();
        let outs = pairs.into_iter().map(|(_, o)| o).collect::<Vec<_>>();
        assert_eq!(outs, paths(&["out/a.mesh", "out/b.model.mesh", "out/c.mesh"]));
    }

    #[test]
    fn existing_directory_with_one_input() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().to_path_buf();
        let pairs = resolve(&paths(&["cube.obj"]), &[out.clone()]).unwrap();
        assert_eq!(pairs[0].1, out.join("cube.mesh"));
    }

    #[test]
    fn trailing_separator_is_directory() {
        let pairs = resolve(&paths(&["in/cube.obj"]), &paths(&["not/yet/made/"])).unwrap();
        assert_eq!(pairs[0].1, PathBuf::from("not/yet/made/cube.mesh"));
        assert_eq!(
            Target::classify(Path::new("plain"), 1),
            Target::File(PathBuf::from("plain"))
        );
    }

    #[test]
    fn mismatch() {
        for n in [0, 2, 4] {
            let outs = (0..n).map(|i| PathBuf::from(format!("{i}"))).collect::<Vec<_>>();
            let r = resolve(&paths(&["a", "b", "c"]), &outs);
            assert!(matches!(r, Err(MeshError::Config(_))), "{n} outputs");
        }
    }

    #[test]
    fn unnamed_input() {
        assert!(mesh_file_name(Path::new("/")).is_err());
        assert_eq!(
            mesh_file_name(Path::new("a/b/teapot.obj")).unwrap(),
            PathBuf::from("teapot.mesh")
        );
    }
}
