//! The syntax tree of a class model. Every node owns its children, has private
//! fields and is never mutated after construction.

mod abstraction;
mod interface;
mod method;
mod model;
mod primitive;

pub use abstraction::{
    AdditionalArgument, AdditionalConstraint, Abstraction, Argument, Arguments, Constraint,
    Constraints, Declaration, Map, MethodResult, Parameter, Parameterized, Prefix, Suffix,
};
pub use interface::{
    AspectDefinition, AspectInterface, AspectSection, AspectSubsection, AttributeSubsection,
    ClassDefinition, ClassMethods, ClassSection, ConstantSubsection, ConstructorSubsection,
    FunctionSubsection, InstanceDefinition, InstanceMethods, InstanceSection, PublicSubsection,
};
pub use method::{
    AspectMethod, AttributeMethod, ConstantMethod, ConstructorMethod, FunctionMethod,
    GetterMethod, Method, PublicMethod, SetterMethod,
};
pub use model::{
    Header, Imports, InterfaceDefinitions, Model, Module, ModuleDefinition, Notice,
    PrimitiveDefinitions,
};
pub use primitive::{
    AdditionalValue, Enumeration, FunctionalDefinition, FunctionalSection, TypeDefinition,
    TypeSection, Value,
};
