use log::debug;

use super::templates::Template;
use super::Generator;
use crate::ast::Model;
use crate::error::{GeneratorError, ModelError};
use crate::parser::Parser;
use crate::utils::make_upper_case;

/// The width of the copyright line inside the notice banner.
pub const MAXIMUM_COPYRIGHT_LENGTH: usize = 78;

impl Generator {
    /// A new model for a class that wraps a single primitive value.
    pub fn create_simple_type(&self, name: &str, copyright: &str) -> Result<Model, ModelError> {
        create_model(SIMPLE_TYPE, name, copyright)
    }

    /// A new model for a generic class that wraps a native collection.
    pub fn create_generic_type(&self, name: &str, copyright: &str) -> Result<Model, ModelError> {
        create_model(GENERIC_TYPE, name, copyright)
    }

    /// A new model for a class made up of named attributes.
    pub fn create_simple_structure(
        &self,
        name: &str,
        copyright: &str,
    ) -> Result<Model, ModelError> {
        create_model(SIMPLE_STRUCTURE, name, copyright)
    }

    /// A new model for a generic class made up of named attributes.
    pub fn create_generic_structure(
        &self,
        name: &str,
        copyright: &str,
    ) -> Result<Model, ModelError> {
        create_model(GENERIC_STRUCTURE, name, copyright)
    }
}

fn create_model(template: &str, name: &str, copyright: &str) -> Result<Model, ModelError> {
    let source = Template::new(template)
        .with("Notice", &notice(copyright)?)
        .with("Name", &make_upper_case(name))
        .render();
    debug!("Creating the {} model from a template", name);
    Parser::new_with_name(&source, format!("{name}.model")).parse_model()
}

/// Centers the copyright within the banner line.
fn notice(copyright: &str) -> Result<String, GeneratorError> {
    let length = copyright.chars().count();
    if length > MAXIMUM_COPYRIGHT_LENGTH {
        return Err(GeneratorError::CopyrightTooLong { length });
    }
    let left = (MAXIMUM_COPYRIGHT_LENGTH - length) / 2;
    let right = MAXIMUM_COPYRIGHT_LENGTH - length - left;
    let line = format!(".{}{copyright}{}.", " ".repeat(left), " ".repeat(right));
    Ok(Template::new(NOTICE).with("Copyright", &line).render())
}

const NOTICE: &str = "/*
................................................................................
<Copyright>
................................................................................
.  DO NOT ALTER OR REMOVE COPYRIGHT NOTICES OR THIS FILE HEADER.               .
.                                                                              .
.  This code is free software; you can redistribute it and/or modify it under  .
.  the terms of The MIT License (MIT), as published by the Open Source         .
.  Initiative. (See https://opensource.org/license/MIT)                        .
................................................................................
*/
";

const SIMPLE_TYPE: &str = r#"<Notice>
/*
Package "<~name>" provides the <~name> type that wraps a primitive value.
*/
package <~name>

// Type Definitions

/*
Units is a constrained type representing the possible units of the <~name>.
*/
type Units uint8

const (
	Degrees Units = iota
	Radians
)

// Class Definitions

/*
<Name>ClassLike is a class interface that defines the complete set of class
constants, constructors and functions that must be supported by each concrete
<~name>-like class.
*/
type <Name>ClassLike interface {
	// Constructor Methods
	MakeFromFloat(value float64) <Name>Like
	MakeFromString(value string) <Name>Like

	// Constant Methods
	Zero() <Name>Like

	// Function Methods
	Sum(
		first <Name>Like,
		second <Name>Like,
	) <Name>Like
}

// Instance Definitions

/*
<Name>Like is an instance interface that defines the complete set of instance
attributes, abstractions and methods that must be supported by each instance of
a concrete <~name>-like class.
*/
type <Name>Like interface {
	// Public Methods
	GetClass() <Name>ClassLike
	AsFloat() float64
	AsString() string
	InUnits(units Units) float64
}
"#;

const GENERIC_TYPE: &str = r#"<Notice>
/*
Package "<~name>" provides a generic <~name> type built on a native array.
*/
package <~name>

// Type Definitions

/*
Size is a constrained type representing the number of values in the <~name>.
*/
type Size uint

// Functional Definitions

/*
RankingFunction[V any] is a functional type that determines the relative
ordering of two values.
*/
type RankingFunction[V any] func(
	first V,
	second V,
) int

// Class Definitions

/*
<Name>ClassLike[V any] is a class interface that defines the complete set of
class constants, constructors and functions that must be supported by each
concrete <~name>-like class.
*/
type <Name>ClassLike[V any] interface {
	// Constructor Methods
	MakeWithSize(size Size) <Name>Like[V]
	MakeFromArray(values []V) <Name>Like[V]

	// Function Methods
	Sorted(
		values <Name>Like[V],
		ranker RankingFunction[V],
	) <Name>Like[V]
}

// Instance Definitions

/*
<Name>Like[V any] is an instance interface that defines the complete set of
instance attributes, abstractions and methods that must be supported by each
instance of a concrete <~name>-like class.
*/
type <Name>Like[V any] interface {
	// Public Methods
	GetClass() <Name>ClassLike[V]
	GetValue(index int) V
	SetValue(
		index int,
		value V,
	)

	// Aspect Methods
	Sequential[V]
}

// Aspect Definitions

/*
Sequential[V any] is an aspect interface that defines a set of method signatures
that must be supported by each instance of a sequential concrete class.
*/
type Sequential[V any] interface {
	IsEmpty() bool
	GetSize() Size
	AsArray() []V
}
"#;

const SIMPLE_STRUCTURE: &str = r#"<Notice>
/*
Package "<~name>" provides the <~name> structure made up of named attributes.
*/
package <~name>

// Class Definitions

/*
<Name>ClassLike is a class interface that defines the complete set of class
constants, constructors and functions that must be supported by each concrete
<~name>-like class.
*/
type <Name>ClassLike interface {
	// Constructor Methods
	Make() <Name>Like
	MakeWithAttributes(
		name string,
		count int,
	) <Name>Like
}

// Instance Definitions

/*
<Name>Like is an instance interface that defines the complete set of instance
attributes, abstractions and methods that must be supported by each instance of
a concrete <~name>-like class.
*/
type <Name>Like interface {
	// Public Methods
	GetClass() <Name>ClassLike
	Reset()

	// Attribute Methods
	GetName() string
	SetName(name string)
	GetCount() int
	IsEnabled() bool
	SetEnabled(enabled bool)
}
"#;

const GENERIC_STRUCTURE: &str = r#"<Notice>
/*
Package "<~name>" provides a generic <~name> structure made up of named
attributes.
*/
package <~name>

// Type Definitions

/*
Mode is a constrained type representing the possible modes of the <~name>.
*/
type Mode uint8

const (
	Idle Mode = iota
	Active
)

// Class Definitions

/*
<Name>ClassLike[K comparable, V any] is a class interface that defines the
complete set of class constants, constructors and functions that must be
supported by each concrete <~name>-like class.
*/
type <Name>ClassLike[K comparable, V any] interface {
	// Constructor Methods
	MakeWithKey(key K) <Name>Like[K, V]
	MakeWithAttributes(
		key K,
		value V,
		mode Mode,
	) <Name>Like[K, V]
}

// Instance Definitions

/*
<Name>Like[K comparable, V any] is an instance interface that defines the
complete set of instance attributes, abstractions and methods that must be
supported by each instance of a concrete <~name>-like class.
*/
type <Name>Like[K comparable, V any] interface {
	// Public Methods
	GetClass() <Name>ClassLike[K, V]

	// Attribute Methods
	GetKey() K
	GetValue() V
	SetValue(value V)
	GetMode() Mode
	SetMode(mode Mode)
}
"#;
