//! File kinds the driver reads or emits.
//!
//! Every [`FileType`] carries three strings that serve different audiences
//! and must not be assumed equal:
//!
//! - [`raw`](FileType::raw): default extension-like token used to name output
//!   files when no other convention applies. Not unique (`sil` is the raw
//!   form of both [`Sil`](FileType::Sil) and [`RawSil`](FileType::RawSil)).
//! - [`name`](FileType::name): stable machine identifier, unique across all
//!   kinds. This is the serialized form and the key for
//!   [`from_name`](FileType::from_name).
//! - [`description`](FileType::description): human label for diagnostics.
//!
//! The three classification predicates ([`is_part_of_swift_compilation`],
//! [`is_textual`], [`is_after_llvm`]) match every variant explicitly. Adding
//! a kind without classifying it is a compile error.
//!
//! [`is_part_of_swift_compilation`]: FileType::is_part_of_swift_compilation
//! [`is_textual`]: FileType::is_textual
//! [`is_after_llvm`]: FileType::is_after_llvm

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::error::DriverError;

/// A kind of file known to the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FileType {
    /// Swift source.
    Swift,
    /// Canonical SIL text.
    Sil,
    /// Canonical serialized SIL.
    Sib,
    /// Raw (pre-mandatory-pass) SIL text.
    RawSil,
    /// Raw serialized SIL.
    RawSib,
    /// Linked executable or library.
    Image,
    /// Compiled object file.
    Object,
    /// Debug symbol bundle.
    DSym,
    /// Make-style dependency listing.
    Dependencies,
    /// Autolink entries extracted from objects.
    Autolink,
    /// Serialized Swift module.
    SwiftModule,
    /// Serialized module documentation.
    SwiftDocumentation,
    /// Public textual module interface.
    SwiftInterface,
    /// Private textual module interface.
    PrivateSwiftInterface,
    /// Package-scoped textual module interface.
    PackageSwiftInterface,
    /// Serialized source location info.
    SwiftSourceInfoFile,
    /// Target assembly.
    Assembly,
    /// LLVM IR text.
    LlvmIr,
    /// LLVM bitcode.
    LlvmBitcode,
    /// Serialized diagnostics.
    Diagnostics,
    /// Serialized diagnostics of the module-emission job.
    EmitModuleDiagnostics,
    /// Dependency listing of the module-emission job.
    EmitModuleDependencies,
    /// Generated Objective-C header.
    ObjcHeader,
    /// Incremental build dependency graph.
    SwiftDeps,
    /// Loaded-module trace.
    ModuleTrace,
    /// Fix-it remapping file.
    Remap,
    /// List of imported modules.
    ImportedModules,
    /// Text-based dynamic library stub.
    Tbd,
    /// Precompiled Clang module.
    Pcm,
    /// Precompiled Clang header.
    Pch,
    /// Clang module map.
    ClangModuleMap,
    /// AST dump.
    Ast,
    /// Index store directory.
    IndexData,
    /// Path recorded in index units in place of the real output.
    IndexUnitOutputPath,
    /// Scanned module dependency graph.
    JsonDependencies,
    /// Target information.
    JsonTargetInfo,
    /// Compiler feature list.
    JsonCompilerFeatures,
    /// Supported frontend feature list.
    JsonSupportedFeatures,
    /// Module artifact listing.
    JsonSwiftArtifacts,
    /// API digester baseline.
    JsonApiBaseline,
    /// ABI digester baseline.
    JsonAbiBaseline,
    /// API descriptor.
    JsonApiDescriptor,
    /// Extracted compile-time constant values.
    SwiftConstValues,
    /// YAML optimization record.
    YamlOptimizationRecord,
    /// Bitstream optimization record.
    BitstreamOptimizationRecord,
    /// Module summary for cross-module optimization.
    ModuleSummary,
    /// Module dependency scanner cache.
    ModDepCache,
    /// Cached diagnostics from a compilation cache replay.
    CachedDiagnostics,
}

impl FileType {
    /// Every file type, in declaration order.
    pub const ALL: [FileType; 48] = [
        FileType::Swift,
        FileType::Sil,
        FileType::Sib,
        FileType::RawSil,
        FileType::RawSib,
        FileType::Image,
        FileType::Object,
        FileType::DSym,
        FileType::Dependencies,
        FileType::Autolink,
        FileType::SwiftModule,
        FileType::SwiftDocumentation,
        FileType::SwiftInterface,
        FileType::PrivateSwiftInterface,
        FileType::PackageSwiftInterface,
        FileType::SwiftSourceInfoFile,
        FileType::Assembly,
        FileType::LlvmIr,
        FileType::LlvmBitcode,
        FileType::Diagnostics,
        FileType::EmitModuleDiagnostics,
        FileType::EmitModuleDependencies,
        FileType::ObjcHeader,
        FileType::SwiftDeps,
        FileType::ModuleTrace,
        FileType::Remap,
        FileType::ImportedModules,
        FileType::Tbd,
        FileType::Pcm,
        FileType::Pch,
        FileType::ClangModuleMap,
        FileType::Ast,
        FileType::IndexData,
        FileType::IndexUnitOutputPath,
        FileType::JsonDependencies,
        FileType::JsonTargetInfo,
        FileType::JsonCompilerFeatures,
        FileType::JsonSupportedFeatures,
        FileType::JsonSwiftArtifacts,
        FileType::JsonApiBaseline,
        FileType::JsonAbiBaseline,
        FileType::JsonApiDescriptor,
        FileType::SwiftConstValues,
        FileType::YamlOptimizationRecord,
        FileType::BitstreamOptimizationRecord,
        FileType::ModuleSummary,
        FileType::ModDepCache,
        FileType::CachedDiagnostics,
    ];

    /// Default extension-like token for output files of this kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use swift_driver_core::FileType;
    ///
    /// assert_eq!(FileType::Object.raw(), "o");
    /// assert_eq!(FileType::RawSil.raw(), FileType::Sil.raw());
    /// ```
    pub fn raw(self) -> &'static str {
        match self {
            FileType::Swift => "swift",
            FileType::Sil | FileType::RawSil => "sil",
            FileType::Sib | FileType::RawSib => "sib",
            FileType::Image => "out",
            FileType::Object => "o",
            FileType::DSym => "dSYM",
            FileType::Dependencies => "d",
            FileType::Autolink => "autolink",
            FileType::SwiftModule => "swiftmodule",
            FileType::SwiftDocumentation => "swiftdoc",
            FileType::SwiftInterface => "swiftinterface",
            FileType::PrivateSwiftInterface => "private.swiftinterface",
            FileType::PackageSwiftInterface => "package.swiftinterface",
            FileType::SwiftSourceInfoFile => "swiftsourceinfo",
            FileType::Assembly => "s",
            FileType::LlvmIr => "ll",
            FileType::LlvmBitcode => "bc",
            FileType::Diagnostics => "dia",
            FileType::EmitModuleDiagnostics => "emit-module.dia",
            FileType::EmitModuleDependencies => "emit-module.d",
            FileType::ObjcHeader => "h",
            FileType::SwiftDeps => "swiftdeps",
            FileType::ModuleTrace => "trace.json",
            FileType::Remap => "remap",
            FileType::ImportedModules => "importedmodules",
            FileType::Tbd => "tbd",
            FileType::Pcm => "pcm",
            FileType::Pch => "pch",
            FileType::ClangModuleMap => "modulemap",
            FileType::Ast => "ast",
            FileType::IndexData => "indexdata",
            FileType::IndexUnitOutputPath => "indexunitoutputpath",
            FileType::JsonDependencies => "dependencies.json",
            FileType::JsonTargetInfo => "targetInfo.json",
            FileType::JsonCompilerFeatures => "compilerFeatures.json",
            FileType::JsonSupportedFeatures => "supportedFeatures.json",
            FileType::JsonSwiftArtifacts => "artifacts.json",
            FileType::JsonApiBaseline => "api.json",
            FileType::JsonAbiBaseline => "abi.json",
            FileType::JsonApiDescriptor => "apidescriptor.json",
            FileType::SwiftConstValues => "swiftconstvalues",
            FileType::YamlOptimizationRecord => "opt.yaml",
            FileType::BitstreamOptimizationRecord => "opt.bitstream",
            FileType::ModuleSummary => "swiftmodulesummary",
            FileType::ModDepCache => "moduledepcache",
            FileType::CachedDiagnostics => "cached-diagnostics",
        }
    }

    /// Stable identifier used in serialized output file maps and reports.
    ///
    /// These strings are an interchange format: never change one.
    ///
    /// # Examples
    ///
    /// ```
    /// use swift_driver_core::FileType;
    ///
    /// assert_eq!(FileType::Object.name(), "object");
    /// assert_eq!(FileType::LlvmBitcode.name(), "llvm-bc");
    /// ```
    pub fn name(self) -> &'static str {
        match self {
            FileType::Swift => "swift",
            FileType::Sil => "sil",
            FileType::Sib => "sib",
            FileType::RawSil => "raw-sil",
            FileType::RawSib => "raw-sib",
            FileType::Image => "image",
            FileType::Object => "object",
            FileType::DSym => "dSYM",
            FileType::Dependencies => "dependencies",
            FileType::Autolink => "autolink",
            FileType::SwiftModule => "swiftmodule",
            FileType::SwiftDocumentation => "swiftdoc",
            FileType::SwiftInterface => "swiftinterface",
            FileType::PrivateSwiftInterface => "private-swiftinterface",
            FileType::PackageSwiftInterface => "package-swiftinterface",
            FileType::SwiftSourceInfoFile => "swiftsourceinfo",
            FileType::Assembly => "assembly",
            FileType::LlvmIr => "llvm-ir",
            FileType::LlvmBitcode => "llvm-bc",
            FileType::Diagnostics => "diagnostics",
            FileType::EmitModuleDiagnostics => "emit-module-diagnostics",
            FileType::EmitModuleDependencies => "emit-module-dependencies",
            FileType::ObjcHeader => "objc-header",
            FileType::SwiftDeps => "swift-dependencies",
            FileType::ModuleTrace => "module-trace",
            FileType::Remap => "remap",
            FileType::ImportedModules => "imported-modules",
            FileType::Tbd => "tbd",
            FileType::Pcm => "pcm",
            FileType::Pch => "pch",
            FileType::ClangModuleMap => "modulemap",
            FileType::Ast => "ast-dump",
            FileType::IndexData => "index-data",
            FileType::IndexUnitOutputPath => "index-unit-output-path",
            FileType::JsonDependencies => "json-dependencies",
            FileType::JsonTargetInfo => "json-target-info",
            FileType::JsonCompilerFeatures => "json-compiler-features",
            FileType::JsonSupportedFeatures => "json-supported-features",
            FileType::JsonSwiftArtifacts => "json-module-artifacts",
            FileType::JsonApiBaseline => "api-baseline-json",
            FileType::JsonAbiBaseline => "abi-baseline-json",
            FileType::JsonApiDescriptor => "api-descriptor-json",
            FileType::SwiftConstValues => "const-values",
            FileType::YamlOptimizationRecord => "yaml-opt-record",
            FileType::BitstreamOptimizationRecord => "bitstream-opt-record",
            FileType::ModuleSummary => "swift-module-summary",
            FileType::ModDepCache => "module-dependency-cache",
            FileType::CachedDiagnostics => "cached-diagnostics",
        }
    }

    /// Human-readable label for diagnostics.
    ///
    /// Kinds named after their extension use the raw form; the rest carry a
    /// spelled-out label.
    ///
    /// # Examples
    ///
    /// ```
    /// use swift_driver_core::FileType;
    ///
    /// assert_eq!(FileType::SwiftDeps.description(), "swiftdeps");
    /// assert_eq!(FileType::ObjcHeader.description(), "Objective-C header");
    /// ```
    pub fn description(self) -> &'static str {
        match self {
            FileType::Swift => "swift",
            FileType::Sil => "sil",
            FileType::Sib => "sib",
            FileType::RawSil => "raw SIL",
            FileType::RawSib => "raw SIB",
            FileType::Image => "linked image",
            FileType::Object => "object file",
            FileType::DSym => "dSYM",
            FileType::Dependencies => "make-style dependencies",
            FileType::Autolink => "autolink",
            FileType::SwiftModule => "swiftmodule",
            FileType::SwiftDocumentation => "swiftdoc",
            FileType::SwiftInterface => "swiftinterface",
            FileType::PrivateSwiftInterface => "private.swiftinterface",
            FileType::PackageSwiftInterface => "package.swiftinterface",
            FileType::SwiftSourceInfoFile => "swiftsourceinfo",
            FileType::Assembly => "assembly source",
            FileType::LlvmIr => "LLVM IR",
            FileType::LlvmBitcode => "LLVM bitcode",
            FileType::Diagnostics => "serialized diagnostics",
            FileType::EmitModuleDiagnostics => "emit-module serialized diagnostics",
            FileType::EmitModuleDependencies => "emit-module dependencies",
            FileType::ObjcHeader => "Objective-C header",
            FileType::SwiftDeps => "swiftdeps",
            FileType::ModuleTrace => "module trace",
            FileType::Remap => "remap",
            FileType::ImportedModules => "importedmodules",
            FileType::Tbd => "tbd",
            FileType::Pcm => "pcm",
            FileType::Pch => "pch",
            FileType::ClangModuleMap => "modulemap",
            FileType::Ast => "AST dump",
            FileType::IndexData => "index data",
            FileType::IndexUnitOutputPath => "index unit output path",
            FileType::JsonDependencies => "dependency scan graph",
            FileType::JsonTargetInfo => "target info",
            FileType::JsonCompilerFeatures => "compiler features",
            FileType::JsonSupportedFeatures => "supported features",
            FileType::JsonSwiftArtifacts => "module artifacts",
            FileType::JsonApiBaseline => "API baseline",
            FileType::JsonAbiBaseline => "ABI baseline",
            FileType::JsonApiDescriptor => "API descriptor",
            FileType::SwiftConstValues => "swiftconstvalues",
            FileType::YamlOptimizationRecord => "YAML optimization record",
            FileType::BitstreamOptimizationRecord => "bitstream optimization record",
            FileType::ModuleSummary => "swiftmodulesummary",
            FileType::ModDepCache => "dependency scanner cache",
            FileType::CachedDiagnostics => "cached diagnostics",
        }
    }

    /// Looks up a file type by its [`name`](FileType::name).
    ///
    /// The lookup table is built from [`FileType::ALL`] on first use and
    /// shared for the rest of the process.
    ///
    /// # Examples
    ///
    /// ```
    /// use swift_driver_core::FileType;
    ///
    /// assert_eq!(FileType::from_name("object"), Some(FileType::Object));
    /// // Raw forms and descriptions are not lookup keys.
    /// assert_eq!(FileType::from_name("o"), None);
    /// assert_eq!(FileType::from_name("LLVM bitcode"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<FileType> {
        FILE_TYPES_BY_NAME.get(name).copied()
    }

    /// Returns `true` for kinds that are valid inputs to a Swift frontend
    /// compilation: source and SIL in raw or canonical form.
    pub fn is_part_of_swift_compilation(self) -> bool {
        match self {
            FileType::Swift
            | FileType::Sil
            | FileType::Sib
            | FileType::RawSil
            | FileType::RawSib => true,
            FileType::Image
            | FileType::Object
            | FileType::DSym
            | FileType::Dependencies
            | FileType::Autolink
            | FileType::SwiftModule
            | FileType::SwiftDocumentation
            | FileType::SwiftInterface
            | FileType::PrivateSwiftInterface
            | FileType::PackageSwiftInterface
            | FileType::SwiftSourceInfoFile
            | FileType::Assembly
            | FileType::LlvmIr
            | FileType::LlvmBitcode
            | FileType::Diagnostics
            | FileType::EmitModuleDiagnostics
            | FileType::EmitModuleDependencies
            | FileType::ObjcHeader
            | FileType::SwiftDeps
            | FileType::ModuleTrace
            | FileType::Remap
            | FileType::ImportedModules
            | FileType::Tbd
            | FileType::Pcm
            | FileType::Pch
            | FileType::ClangModuleMap
            | FileType::Ast
            | FileType::IndexData
            | FileType::IndexUnitOutputPath
            | FileType::JsonDependencies
            | FileType::JsonTargetInfo
            | FileType::JsonCompilerFeatures
            | FileType::JsonSupportedFeatures
            | FileType::JsonSwiftArtifacts
            | FileType::JsonApiBaseline
            | FileType::JsonAbiBaseline
            | FileType::JsonApiDescriptor
            | FileType::SwiftConstValues
            | FileType::YamlOptimizationRecord
            | FileType::BitstreamOptimizationRecord
            | FileType::ModuleSummary
            | FileType::ModDepCache
            | FileType::CachedDiagnostics => false,
        }
    }

    /// Returns `true` if files of this kind are human-readable text.
    pub fn is_textual(self) -> bool {
        match self {
            FileType::Swift
            | FileType::Sil
            | FileType::RawSil
            | FileType::Dependencies
            | FileType::Autolink
            | FileType::SwiftInterface
            | FileType::PrivateSwiftInterface
            | FileType::PackageSwiftInterface
            | FileType::Assembly
            | FileType::LlvmIr
            | FileType::EmitModuleDependencies
            | FileType::ObjcHeader
            | FileType::ModuleTrace
            | FileType::Remap
            | FileType::ImportedModules
            | FileType::Tbd
            | FileType::ClangModuleMap
            | FileType::Ast
            | FileType::JsonDependencies
            | FileType::JsonTargetInfo
            | FileType::JsonCompilerFeatures
            | FileType::JsonSupportedFeatures
            | FileType::JsonSwiftArtifacts
            | FileType::JsonApiBaseline
            | FileType::JsonAbiBaseline
            | FileType::JsonApiDescriptor
            | FileType::SwiftConstValues
            | FileType::YamlOptimizationRecord => true,
            FileType::Sib
            | FileType::RawSib
            | FileType::Image
            | FileType::Object
            | FileType::DSym
            | FileType::SwiftModule
            | FileType::SwiftDocumentation
            | FileType::SwiftSourceInfoFile
            | FileType::LlvmBitcode
            | FileType::Diagnostics
            | FileType::EmitModuleDiagnostics
            | FileType::SwiftDeps
            | FileType::Pcm
            | FileType::Pch
            | FileType::IndexData
            | FileType::IndexUnitOutputPath
            | FileType::BitstreamOptimizationRecord
            | FileType::ModuleSummary
            | FileType::ModDepCache
            | FileType::CachedDiagnostics => false,
        }
    }

    /// Returns `true` for outputs produced by LLVM code generation.
    ///
    /// With a multi-threaded backend these outputs exist once per LLVM
    /// module rather than once per frontend job.
    pub fn is_after_llvm(self) -> bool {
        match self {
            FileType::Assembly | FileType::LlvmIr | FileType::LlvmBitcode | FileType::Object => {
                true
            }
            FileType::Swift
            | FileType::Sil
            | FileType::Sib
            | FileType::RawSil
            | FileType::RawSib
            | FileType::Image
            | FileType::DSym
            | FileType::Dependencies
            | FileType::Autolink
            | FileType::SwiftModule
            | FileType::SwiftDocumentation
            | FileType::SwiftInterface
            | FileType::PrivateSwiftInterface
            | FileType::PackageSwiftInterface
            | FileType::SwiftSourceInfoFile
            | FileType::Diagnostics
            | FileType::EmitModuleDiagnostics
            | FileType::EmitModuleDependencies
            | FileType::ObjcHeader
            | FileType::SwiftDeps
            | FileType::ModuleTrace
            | FileType::Remap
            | FileType::ImportedModules
            | FileType::Tbd
            | FileType::Pcm
            | FileType::Pch
            | FileType::ClangModuleMap
            | FileType::Ast
            | FileType::IndexData
            | FileType::IndexUnitOutputPath
            | FileType::JsonDependencies
            | FileType::JsonTargetInfo
            | FileType::JsonCompilerFeatures
            | FileType::JsonSupportedFeatures
            | FileType::JsonSwiftArtifacts
            | FileType::JsonApiBaseline
            | FileType::JsonAbiBaseline
            | FileType::JsonApiDescriptor
            | FileType::SwiftConstValues
            | FileType::YamlOptimizationRecord
            | FileType::BitstreamOptimizationRecord
            | FileType::ModuleSummary
            | FileType::ModDepCache
            | FileType::CachedDiagnostics => false,
        }
    }
}

static FILE_TYPES_BY_NAME: LazyLock<HashMap<&'static str, FileType>> = LazyLock::new(|| {
    let table: HashMap<&'static str, FileType> =
        FileType::ALL.iter().map(|ty| (ty.name(), *ty)).collect();
    debug!(entries = table.len(), "built file type name table");
    table
});

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl FromStr for FileType {
    type Err = DriverError;

    /// Parses a file type [`name`](FileType::name).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FileType::from_name(s).ok_or_else(|| DriverError::UnknownFileType(s.to_string()))
    }
}

impl Serialize for FileType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for FileType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        FileType::from_name(&name)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown file type name: {name}")))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_all_is_dense_in_declaration_order() {
        for (index, ty) in FileType::ALL.iter().enumerate() {
            assert_eq!(*ty as usize, index, "{ty:?} out of order in FileType::ALL");
        }
        assert_eq!(
            FileType::ALL.len(),
            FileType::CachedDiagnostics as usize + 1
        );
    }

    #[test]
    fn test_name_round_trips_through_lookup() {
        for ty in FileType::ALL {
            assert_eq!(FileType::from_name(ty.name()), Some(ty), "{ty:?}");
        }
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<&str> = FileType::ALL.iter().map(|ty| ty.name()).collect();
        assert_eq!(names.len(), FileType::ALL.len());
    }

    #[test]
    fn test_unknown_name_is_absent() {
        assert_eq!(FileType::from_name("not-a-kind"), None);
        assert_eq!(FileType::from_name(""), None);
        assert_eq!(FileType::from_name("Object"), None);
    }

    #[test]
    fn test_three_strings_can_all_differ() {
        let ty = FileType::LlvmBitcode;
        assert_eq!(ty.raw(), "bc");
        assert_eq!(ty.name(), "llvm-bc");
        assert_eq!(ty.description(), "LLVM bitcode");
        assert_eq!(ty.to_string(), "LLVM bitcode");

        let distinct: Vec<FileType> = FileType::ALL
            .into_iter()
            .filter(|ty| ty.description() != ty.raw() && ty.description() != ty.name())
            .filter(|ty| ty.raw() != ty.name())
            .collect();
        for ty in [
            FileType::Object,
            FileType::Assembly,
            FileType::LlvmIr,
            FileType::ObjcHeader,
            FileType::RawSil,
            FileType::JsonTargetInfo,
        ] {
            assert!(distinct.contains(&ty), "{ty:?} should carry three distinct strings");
        }
    }

    #[test]
    fn test_extension_named_kinds_describe_by_raw_form() {
        for ty in [
            FileType::SwiftDeps,
            FileType::PrivateSwiftInterface,
            FileType::ImportedModules,
            FileType::ModuleSummary,
        ] {
            assert_ne!(ty.raw(), ty.name(), "{ty:?}");
            assert_eq!(ty.description(), ty.raw(), "{ty:?}");
        }
        assert_eq!(FileType::Swift.description(), "swift");
        assert_eq!(FileType::SwiftModule.description(), "swiftmodule");
    }

    #[test]
    fn test_descriptions_are_not_copies_of_names() {
        let copies = FileType::ALL
            .into_iter()
            .filter(|ty| ty.raw() != ty.name() && ty.description() == ty.name())
            .count();
        assert_eq!(copies, 0);
    }

    #[test]
    fn test_object_classification() {
        let ty = FileType::Object;
        assert!(ty.is_after_llvm());
        assert!(!ty.is_textual());
        assert!(!ty.is_part_of_swift_compilation());
    }

    #[test]
    fn test_swift_source_classification() {
        let ty = FileType::Swift;
        assert!(ty.is_part_of_swift_compilation());
        assert!(ty.is_textual());
        assert!(!ty.is_after_llvm());
    }

    #[test]
    fn test_after_llvm_set() {
        let after: Vec<FileType> = FileType::ALL
            .into_iter()
            .filter(|ty| ty.is_after_llvm())
            .collect();
        assert_eq!(
            after,
            vec![
                FileType::Object,
                FileType::Assembly,
                FileType::LlvmIr,
                FileType::LlvmBitcode
            ]
        );
    }

    #[test]
    fn test_compilation_inputs_are_never_outputs_of_llvm() {
        for ty in FileType::ALL {
            assert!(
                !(ty.is_part_of_swift_compilation() && ty.is_after_llvm()),
                "{ty:?}"
            );
        }
    }

    #[test]
    fn test_textual_examples() {
        for ty in [
            FileType::Sil,
            FileType::RawSil,
            FileType::Dependencies,
            FileType::SwiftInterface,
            FileType::JsonDependencies,
            FileType::Assembly,
            FileType::LlvmIr,
            FileType::YamlOptimizationRecord,
            FileType::Remap,
        ] {
            assert!(ty.is_textual(), "{ty:?} should be textual");
        }
        for ty in [
            FileType::Sib,
            FileType::SwiftModule,
            FileType::LlvmBitcode,
            FileType::Diagnostics,
            FileType::Pcm,
            FileType::BitstreamOptimizationRecord,
            FileType::ModuleSummary,
            FileType::SwiftDeps,
        ] {
            assert!(!ty.is_textual(), "{ty:?} should be binary");
        }
    }

    #[test]
    fn test_from_str_and_serde_use_name() {
        assert_eq!("llvm-ir".parse::<FileType>().unwrap(), FileType::LlvmIr);
        assert!(matches!(
            "ll".parse::<FileType>(),
            Err(DriverError::UnknownFileType(name)) if name == "ll"
        ));

        let json = serde_json::to_string(&FileType::ObjcHeader).unwrap();
        assert_eq!(json, "\"objc-header\"");
        let back: FileType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, FileType::ObjcHeader);
        assert!(serde_json::from_str::<FileType>("\"h\"").is_err());
    }
}
