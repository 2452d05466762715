//! Fixed frame around the generated declarations
//!
//! The preamble opens an include guard and a namespace; the postamble closes
//! them. `TRUE`/`FALSE` are commonly `#define`d by C headers, which would
//! clobber constants of the same name, so they are undefined around the
//! namespace and restored afterwards.

use std::io::{self, Write};

/// Namespace and include guard of the generated header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderLayout<'a> {
    pub namespace: &'a str,
    pub include_guard: &'a str,
}

impl<'a> HeaderLayout<'a> {
    #[must_use]
    pub fn new(namespace: &'a str, include_guard: &'a str) -> Self {
        Self {
            namespace,
            include_guard,
        }
    }

    /// Write everything up to and including `namespace <ns> {`
    pub fn write_preamble<W: Write>(&self, output: &mut W) -> io::Result<()> {
        let Self {
            namespace,
            include_guard,
        } = self;
        write!(
            output,
            "//+
// C++ constants equivalent to {namespace} parameters.
//
// This file is generated by fconstgen from the Fortran sources.
//
// DO NOT EDIT THIS FILE DIRECTLY!
//-

#ifndef {include_guard}

// The TRUE/FALSE stuff is to get around a problem with TRUE and FALSE being defined using #define

#ifdef TRUE
#undef TRUE
#define TRUE_DEF
#endif

#ifdef FALSE
#undef FALSE
#define FALSE_DEF
#endif

namespace {namespace} {{
"
        )
    }

    /// Write the closing brace, the `TRUE`/`FALSE` restore and the guard
    pub fn write_postamble<W: Write>(&self, output: &mut W) -> io::Result<()> {
        let include_guard = self.include_guard;
        write!(
            output,
            "
}}

#ifdef TRUE_DEF
#define TRUE    1
#undef TRUE_DEF
#endif

#ifdef FALSE_DEF
#define FALSE   0
#undef FALSE_DEF
#endif

#define {include_guard}
#endif
"
        )
    }
}
