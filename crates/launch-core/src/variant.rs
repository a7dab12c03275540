use std::fmt;

use serde::Serialize;

/// Which companion script a launch runs inside Blender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Imports rigged meshes (GLB/FBX) into a fresh scene.
    ImportMeshes,
    /// Imports a PLY point cloud for viewing.
    ViewPly,
}

impl Variant {
    pub fn name(self) -> &'static str {
        match self {
            Variant::ImportMeshes => "import-meshes",
            Variant::ViewPly => "view-ply",
        }
    }

    /// File name of the companion script, expected next to the launcher.
    pub fn companion_file_name(self) -> &'static str {
        match self {
            Variant::ImportMeshes => "import_meshes_to_blender.py",
            Variant::ViewPly => "view_ply.py",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
