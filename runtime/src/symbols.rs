//! The table of functions the runtime exports over the C ABI.
//!
//! Code generators use it to declare runtime calls by name, and `c_header`
//! renders it for C programs that want to link against the runtime directly.

use std::{fmt::Write, sync::OnceLock};

use rustc_hash::FxHashMap;

/// A C type appearing in an exported signature.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AbiType {
    /// A borrowed, terminated string (`const char*`).
    Text,
    /// A terminated string whose ownership moves with it (`char*`).
    OwnedText,
    /// A C `int`.
    Int,
    /// A byte count (`size_t`).
    Size,
}

impl AbiType {
    pub fn c_name(self) -> &'static str {
        match self {
            AbiType::Text => "const char*",
            AbiType::OwnedText => "char*",
            AbiType::Int => "int",
            AbiType::Size => "size_t",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Param {
    pub name: &'static str,
    pub ty: AbiType,
}

const fn param(name: &'static str, ty: AbiType) -> Param {
    Param { name, ty }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RuntimeFunction {
    pub name: &'static str,
    pub params: &'static [Param],
    /// `None` for `void`.
    pub returns: Option<AbiType>,
    pub doc: &'static str,
}

impl RuntimeFunction {
    /// The C prototype, e.g. `void println(const char* text);`.
    pub fn c_declaration(&self) -> String {
        let returns = self.returns.map_or("void", AbiType::c_name);
        let params = if self.params.is_empty() {
            "void".to_owned()
        } else {
            self.params
                .iter()
                .map(|param| format!("{} {}", param.ty.c_name(), param.name))
                .collect::<Vec<_>>()
                .join(", ")
        };
        format!("{} {}({});", returns, self.name, params)
    }
}

/// Every function in [`crate::ffi`], in declaration order.
pub static FUNCTIONS: &[RuntimeFunction] = &[
    RuntimeFunction {
        name: "print",
        params: &[param("text", AbiType::Text)],
        returns: None,
        doc: "Print a string, without a newline",
    },
    RuntimeFunction {
        name: "println",
        params: &[param("text", AbiType::Text)],
        returns: None,
        doc: "Print a string with a newline",
    },
    RuntimeFunction {
        name: "printn",
        params: &[param("text", AbiType::Text), param("n", AbiType::Int)],
        returns: None,
        doc: "Print a string and a number, with a newline",
    },
    RuntimeFunction {
        name: "prints",
        params: &[param("first", AbiType::Text), param("second", AbiType::Text)],
        returns: None,
        doc: "Print a string and a string, with a newline",
    },
    RuntimeFunction {
        name: "print_int",
        params: &[param("n", AbiType::Int)],
        returns: None,
        doc: "Print a number with a newline",
    },
    RuntimeFunction {
        name: "textlen",
        params: &[param("text", AbiType::Text)],
        returns: Some(AbiType::Size),
        doc: "Get the length of a string",
    },
    RuntimeFunction {
        name: "linein",
        params: &[],
        returns: Some(AbiType::OwnedText),
        doc: "Get a line of input from the user, or NULL at the end of input",
    },
    RuntimeFunction {
        name: "readchar",
        params: &[],
        returns: Some(AbiType::OwnedText),
        doc: "Get a single character from the user, or NULL at the end of input",
    },
    RuntimeFunction {
        name: "text_free",
        params: &[param("text", AbiType::OwnedText)],
        returns: None,
        doc: "Release a string returned by linein or readchar",
    },
];

fn index() -> &'static FxHashMap<&'static str, &'static RuntimeFunction> {
    static INDEX: OnceLock<FxHashMap<&'static str, &'static RuntimeFunction>> = OnceLock::new();
    INDEX.get_or_init(|| FUNCTIONS.iter().map(|func| (func.name, func)).collect())
}

pub fn lookup(name: &str) -> Option<&'static RuntimeFunction> {
    index().get(name).copied()
}

pub fn contains(name: &str) -> bool {
    index().contains_key(name)
}

/// Renders a C header declaring every exported function.
pub fn c_header() -> String {
    let mut header = String::new();

    header.push_str("/// Runtime library functions\n");
    header.push_str("/// Strings returned by linein and readchar are owned by the caller.\n\n");
    header.push_str("#ifndef PSEUDO_RUNTIME_H\n#define PSEUDO_RUNTIME_H\n\n");
    header.push_str("#include <stddef.h>\n");

    for func in FUNCTIONS {
        // writing to a `String` cannot fail
        let _ = write!(header, "\n/// {}\n{}\n", func.doc, func.c_declaration());
    }

    header.push_str("\n#endif\n");
    header
}
