//! The Swift driver's built-in option table.
//!
//! [`driver_options`] returns a process-wide table built on first use.
//! Every generator in it produces a [`ParsedOption`] naming the canonical
//! spelling, so an alias and its canonical option yield identical values.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Generator, OptionTable};

/// Structured argument of a parsed option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum OptionArgument {
    /// The option takes no argument.
    Flag,
    /// A single argument value.
    Value(String),
    /// A list of argument values.
    Values(Vec<String>),
    /// A positional input path.
    Input(String),
}

/// Value produced by a built-in generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedOption {
    /// Canonical spelling of the option (aliases resolve to it).
    pub option: String,
    /// The option's argument.
    pub argument: OptionArgument,
}

impl ParsedOption {
    fn new(option: &str, argument: OptionArgument) -> Self {
        Self {
            option: option.to_string(),
            argument,
        }
    }
}

/// Spelling registered for positional inputs.
pub const INPUT_SPELLING: &str = "<input>";

fn flag(canonical: &'static str) -> Generator<ParsedOption> {
    Generator::flag(move || ParsedOption::new(canonical, OptionArgument::Flag))
}

fn joined(canonical: &'static str) -> Generator<ParsedOption> {
    Generator::joined(move |value| {
        ParsedOption::new(canonical, OptionArgument::Value(value.to_string()))
    })
}

fn separate(canonical: &'static str) -> Generator<ParsedOption> {
    Generator::separate(move |value| {
        ParsedOption::new(canonical, OptionArgument::Value(value.to_string()))
    })
}

fn joined_or_separate(canonical: &'static str) -> Generator<ParsedOption> {
    Generator::joined_or_separate(move |value| {
        ParsedOption::new(canonical, OptionArgument::Value(value.to_string()))
    })
}

fn remaining(canonical: &'static str) -> Generator<ParsedOption> {
    Generator::remaining(move |values| {
        ParsedOption::new(canonical, OptionArgument::Values(values.to_vec()))
    })
}

fn comma_joined(canonical: &'static str) -> Generator<ParsedOption> {
    Generator::comma_joined(move |values| {
        ParsedOption::new(canonical, OptionArgument::Values(values.to_vec()))
    })
}

fn input() -> Generator<ParsedOption> {
    Generator::input(|path| {
        ParsedOption::new(INPUT_SPELLING, OptionArgument::Input(path.to_string()))
    })
}

static DRIVER_OPTIONS: LazyLock<OptionTable<ParsedOption>> = LazyLock::new(|| {
    let table = build_driver_options();
    debug!(
        entries = table.len(),
        aliases = table.aliases().count(),
        "built driver option table"
    );
    table
});

/// Returns the Swift driver's option table.
///
/// # Examples
///
/// ```
/// use swift_driver_core::{GeneratorKind, RawArgument, driver_options};
///
/// let table = driver_options();
/// let output = table.find("-o").unwrap();
/// assert_eq!(output.kind(), GeneratorKind::JoinedOrSeparate);
///
/// let parsed = output.generator.generate(RawArgument::Text("main.o")).unwrap();
/// assert_eq!(parsed.option, "-o");
/// ```
pub fn driver_options() -> &'static OptionTable<ParsedOption> {
    &DRIVER_OPTIONS
}

#[rustfmt::skip]
fn build_driver_options() -> OptionTable<ParsedOption> {
    let mut t = OptionTable::new();

    t.add_option(INPUT_SPELLING, input(), false, None, None);
    t.add_option("--", remaining("--"), false, Some("<arguments>"), Some("Pass the remaining arguments to the program being run"));

    // Help and version
    let help = flag("-help");
    t.add_option("-help", help.clone(), false, None, Some("Display available options"));
    t.add_alias("-h", help.clone(), false);
    t.add_alias("--help", help, false);
    let help_hidden = flag("-help-hidden");
    t.add_option("-help-hidden", help_hidden.clone(), false, None, Some("Display available options, including hidden options"));
    t.add_alias("--help-hidden", help_hidden, false);
    let version = flag("-version");
    t.add_option("-version", version.clone(), false, None, Some("Print version information and exit"));
    t.add_alias("--version", version, false);
    t.add_option("-v", flag("-v"), false, None, Some("Show commands to run and use verbose output"));

    // Modes
    let object = flag("-c");
    t.add_option("-c", object.clone(), false, None, Some("Emit object file(s) (-c)"));
    t.add_alias("-emit-object", object, false);
    let assembly = flag("-S");
    t.add_option("-S", assembly.clone(), false, None, Some("Emit assembly file(s) (-S)"));
    t.add_alias("-emit-assembly", assembly, false);
    t.add_option("-emit-ir", flag("-emit-ir"), false, None, Some("Emit LLVM IR file(s)"));
    t.add_option("-emit-bc", flag("-emit-bc"), false, None, Some("Emit LLVM BC file(s)"));
    t.add_option("-emit-sil", flag("-emit-sil"), false, None, Some("Emit canonical SIL file(s)"));
    t.add_option("-emit-silgen", flag("-emit-silgen"), false, None, Some("Emit raw SIL file(s)"));
    t.add_option("-emit-sib", flag("-emit-sib"), false, None, Some("Emit serialized AST + canonical SIL file(s)"));
    t.add_option("-emit-sibgen", flag("-emit-sibgen"), false, None, Some("Emit serialized AST + raw SIL file(s)"));
    t.add_option("-emit-executable", flag("-emit-executable"), false, None, Some("Emit a linked executable"));
    t.add_option("-emit-library", flag("-emit-library"), false, None, Some("Emit a linked library"));
    t.add_option("-typecheck", flag("-typecheck"), false, None, Some("Parse and type-check input file(s)"));
    t.add_option("-parse", flag("-parse"), false, None, Some("Parse input file(s)"));
    t.add_option("-dump-ast", flag("-dump-ast"), false, None, Some("Parse and type-check input file(s) and dump AST(s)"));
    t.add_option("-print-target-info", flag("-print-target-info"), false, None, Some("Print target information for the given target <triple>, such as -target x86_64-apple-macos10.9"));
    t.add_option("-scan-dependencies", flag("-scan-dependencies"), false, None, Some("Scan dependencies of the given Swift sources"));

    // Outputs
    t.add_option("-o", joined_or_separate("-o"), false, Some("<file>"), Some("Write output to <file>"));
    t.add_option("-emit-module", flag("-emit-module"), false, None, Some("Emit an importable module"));
    t.add_option("-emit-module-path", separate("-emit-module-path"), false, Some("<path>"), Some("Emit an importable module to <path>"));
    t.add_option("-emit-module-interface", flag("-emit-module-interface"), false, None, Some("Output module interface file"));
    t.add_option("-emit-module-interface-path", separate("-emit-module-interface-path"), false, Some("<path>"), Some("Output module interface file to <path>"));
    t.add_option("-emit-private-module-interface-path", separate("-emit-private-module-interface-path"), false, Some("<path>"), Some("Output private module interface file to <path>"));
    t.add_option("-emit-objc-header", flag("-emit-objc-header"), false, None, Some("Emit an Objective-C header file"));
    t.add_option("-emit-objc-header-path", separate("-emit-objc-header-path"), false, Some("<path>"), Some("Emit an Objective-C header file to <path>"));
    t.add_option("-emit-dependencies", flag("-emit-dependencies"), false, None, Some("Emit basic Make-compatible dependencies files"));
    t.add_option("-emit-tbd", flag("-emit-tbd"), false, None, Some("Emit a TBD file"));
    t.add_option("-emit-tbd-path", separate("-emit-tbd-path"), false, Some("<path>"), Some("Emit the TBD file to <path>"));
    t.add_option("-emit-loaded-module-trace", flag("-emit-loaded-module-trace"), false, None, Some("Emit a JSON file containing information about what modules were loaded"));
    t.add_option("-serialize-diagnostics", flag("-serialize-diagnostics"), false, None, Some("Serialize diagnostics in a binary format"));
    t.add_option("-save-optimization-record", flag("-save-optimization-record"), false, None, Some("Generate a YAML optimization record file"));
    t.add_option("-save-optimization-record=", joined("-save-optimization-record="), false, Some("<format>"), Some("Generate an optimization record file in a specific format (default: YAML)"));
    t.add_option("-output-file-map", separate("-output-file-map"), false, Some("<path>"), Some("A file which specifies the location of outputs"));
    t.add_option("-index-store-path", separate("-index-store-path"), false, Some("<path>"), Some("Store indexing data to <path>"));
    t.add_option("-save-temps", flag("-save-temps"), false, None, Some("Save intermediate compilation results"));

    // Search paths and linking
    t.add_option("-I", joined_or_separate("-I"), false, None, Some("Add directory to the import search path"));
    t.add_option("-F", joined_or_separate("-F"), false, None, Some("Add directory to framework search path"));
    t.add_option("-L", joined_or_separate("-L"), false, None, Some("Add directory to library link search path"));
    t.add_option("-l", joined("-l"), false, None, Some("Specifies a library which should be linked against"));
    t.add_option("-framework", separate("-framework"), false, None, Some("Specifies a framework which should be linked against"));
    t.add_option("-sdk", separate("-sdk"), false, Some("<sdk>"), Some("Compile against <sdk>"));
    t.add_option("-target", separate("-target"), false, Some("<triple>"), Some("Generate code for the given target <triple>, such as x86_64-apple-macos10.9"));
    t.add_option("-resource-dir", separate("-resource-dir"), false, Some("</usr/lib/swift>"), Some("The directory that holds the compiler resource files"));
    t.add_option("-static-stdlib", flag("-static-stdlib"), false, None, Some("Statically link the Swift standard library"));
    t.add_option("-use-ld=", joined("-use-ld="), false, None, Some("Specifies the flavor of the linker to be used"));
    t.add_option("-Xlinker", separate("-Xlinker"), false, None, Some("Specifies an option which should be passed to the linker"));
    t.add_option("-Xcc", separate("-Xcc"), false, Some("<arg>"), Some("Pass <arg> to the C/C++/Objective-C compiler"));
    t.add_option("-Xclang-linker", separate("-Xclang-linker"), true, None, Some("Pass <arg> to Clang when invoking the linker"));
    t.add_option("-Xfrontend", separate("-Xfrontend"), true, Some("<arg>"), Some("Pass <arg> to the Swift frontend"));
    t.add_option("-Xllvm", separate("-Xllvm"), true, Some("<arg>"), Some("Pass <arg> to LLVM."));
    t.add_option("-import-objc-header", separate("-import-objc-header"), false, None, Some("Implicitly imports an Objective-C header file"));

    // Module configuration
    t.add_option("-module-name", separate("-module-name"), false, None, Some("Name of the module to build"));
    t.add_option("-module-link-name", separate("-module-link-name"), false, None, Some("Library to link against when using this module"));
    t.add_option("-swift-version", separate("-swift-version"), false, Some("<vers>"), Some("Interpret input according to a specific Swift language version number"));
    t.add_option("-D", joined_or_separate("-D"), false, None, Some("Marks a conditional compilation flag as true"));
    t.add_option("-enable-library-evolution", flag("-enable-library-evolution"), false, None, Some("Build the module to allow binary-compatible library evolution"));
    t.add_option("-parse-as-library", flag("-parse-as-library"), false, None, Some("Parse the input file(s) as libraries, not scripts"));
    t.add_option("-parse-stdlib", flag("-parse-stdlib"), true, None, Some("Parse the input file(s) as the Swift standard library"));
    t.add_option("-working-directory", separate("-working-directory"), false, Some("<path>"), Some("Resolve file paths relative to the specified directory"));

    // Code generation
    t.add_option("-g", flag("-g"), false, None, Some("Emit debug info. This is the preferred setting for debugging with LLDB."));
    t.add_option("-gnone", flag("-gnone"), false, None, Some("Don't emit debug info"));
    t.add_option("-debug-info-format=", joined("-debug-info-format="), false, None, Some("Specify the debug info format type to either 'dwarf' or 'codeview'"));
    t.add_option("-O", flag("-O"), false, None, Some("Compile with optimizations"));
    t.add_option("-Onone", flag("-Onone"), false, None, Some("Compile without any optimization"));
    t.add_option("-Osize", flag("-Osize"), false, None, Some("Compile with optimizations and target small code size"));
    t.add_option("-Ounchecked", flag("-Ounchecked"), false, None, Some("Compile with optimizations and remove runtime safety checks"));
    let wmo = flag("-whole-module-optimization");
    t.add_option("-whole-module-optimization", wmo.clone(), false, None, Some("Optimize input files together instead of individually"));
    t.add_alias("-wmo", wmo, false);
    t.add_option("-no-whole-module-optimization", flag("-no-whole-module-optimization"), false, None, Some("Disable optimizing input files together instead of individually"));
    t.add_option("-num-threads", separate("-num-threads"), false, Some("<n>"), Some("Enable multi-threading and specify number of threads"));
    t.add_option("-sanitize=", comma_joined("-sanitize="), false, Some("<check>"), Some("Turn on runtime checks for erroneous behavior."));
    t.add_option("-sanitize-coverage=", comma_joined("-sanitize-coverage="), false, Some("<type>"), Some("Specify the type of coverage instrumentation for Sanitizers and additional options separated by commas"));
    t.add_option("-embed-bitcode", flag("-embed-bitcode"), true, None, Some("Embed LLVM IR bitcode as data"));
    t.add_option("-enforce-exclusivity=", joined("-enforce-exclusivity="), false, Some("<enforcement>"), Some("Enforce law of exclusivity"));

    // Build orchestration
    t.add_option("-j", joined_or_separate("-j"), false, Some("<n>"), Some("Number of commands to execute in parallel"));
    t.add_option("-incremental", flag("-incremental"), false, None, Some("Perform an incremental build if possible"));
    t.add_option("-enable-batch-mode", flag("-enable-batch-mode"), false, None, Some("Enable combining frontend jobs into batches"));
    t.add_option("-disable-batch-mode", flag("-disable-batch-mode"), false, None, Some("Disable combining frontend jobs into batches"));
    t.add_option("-driver-batch-count", separate("-driver-batch-count"), true, None, Some("Use the given number of batch-mode partitions, rather than partitioning dynamically"));
    let print_jobs = flag("-driver-print-jobs");
    t.add_option("-driver-print-jobs", print_jobs.clone(), true, None, Some("Dump list of job which would be executed"));
    t.add_alias("-###", print_jobs, false);
    t.add_option("-driver-time-compilation", flag("-driver-time-compilation"), false, None, Some("Prints the total time it took to execute all compilation tasks"));
    t.add_option("-parseable-output", flag("-parseable-output"), false, None, Some("Emit textual output in a parseable format"));
    t.add_option("-continue-building-after-errors", flag("-continue-building-after-errors"), false, None, Some("Continue building, even after errors are encountered"));
    t.add_option("-stats-output-dir", separate("-stats-output-dir"), true, None, Some("Directory to write unified statistics-output files to"));
    t.add_option("-driver-use-frontend-path", separate("-driver-use-frontend-path"), true, None, Some("Use the given executable to perform compilations. Arguments can be passed as a ';' separated list"));
    t.add_option("-disallow-use-new-driver", flag("-disallow-use-new-driver"), true, None, None);

    // Diagnostics
    t.add_option("-suppress-warnings", flag("-suppress-warnings"), false, None, Some("Suppress all warnings"));
    t.add_option("-warnings-as-errors", flag("-warnings-as-errors"), false, None, Some("Treat warnings as errors"));
    t.add_option("-no-warnings-as-errors", flag("-no-warnings-as-errors"), false, None, Some("Don't treat warnings as errors"));
    t.add_option("-color-diagnostics", flag("-color-diagnostics"), false, None, Some("Print diagnostics in color"));
    t.add_option("-no-color-diagnostics", flag("-no-color-diagnostics"), false, None, Some("Do not print diagnostics in color"));
    t.add_option("-diagnostic-style", separate("-diagnostic-style"), false, Some("<style>"), Some("The formatting style used when printing diagnostics ('swift' or 'llvm')"));

    t
}
