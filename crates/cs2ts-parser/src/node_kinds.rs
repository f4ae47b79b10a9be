//! Tree-sitter node kind constants for the C# grammar.
//!
//! These match the node types defined in tree-sitter-c-sharp.

// Declarations
pub const NAMESPACE_DECLARATION: &str = "namespace_declaration";
pub const FILE_SCOPED_NAMESPACE_DECLARATION: &str = "file_scoped_namespace_declaration";
pub const CLASS_DECLARATION: &str = "class_declaration";
pub const STRUCT_DECLARATION: &str = "struct_declaration";
pub const INTERFACE_DECLARATION: &str = "interface_declaration";
pub const ENUM_DECLARATION: &str = "enum_declaration";
pub const PROPERTY_DECLARATION: &str = "property_declaration";
pub const ENUM_MEMBER_DECLARATION: &str = "enum_member_declaration";

// Skipped without a warning
pub const USING_DIRECTIVE: &str = "using_directive";
pub const EXTERN_ALIAS_DIRECTIVE: &str = "extern_alias_directive";
pub const GLOBAL_ATTRIBUTE: &str = "global_attribute";
pub const SHEBANG_DIRECTIVE: &str = "shebang_directive";
pub const COMMENT: &str = "comment";
pub const PREPROC_PREFIX: &str = "preproc_";

// Members that carry no data shape
pub const FIELD_DECLARATION: &str = "field_declaration";
pub const EVENT_FIELD_DECLARATION: &str = "event_field_declaration";
pub const EVENT_DECLARATION: &str = "event_declaration";
pub const METHOD_DECLARATION: &str = "method_declaration";
pub const CONSTRUCTOR_DECLARATION: &str = "constructor_declaration";
pub const DESTRUCTOR_DECLARATION: &str = "destructor_declaration";
pub const INDEXER_DECLARATION: &str = "indexer_declaration";
pub const OPERATOR_DECLARATION: &str = "operator_declaration";
pub const CONVERSION_OPERATOR_DECLARATION: &str = "conversion_operator_declaration";

// Structure
pub const DECLARATION_LIST: &str = "declaration_list";
pub const ENUM_MEMBER_DECLARATION_LIST: &str = "enum_member_declaration_list";
pub const MODIFIER: &str = "modifier";
pub const BASE_LIST: &str = "base_list";
pub const PRIMARY_CONSTRUCTOR_BASE_TYPE: &str = "primary_constructor_base_type";
pub const TYPE_PARAMETER_LIST: &str = "type_parameter_list";
pub const TYPE_PARAMETER: &str = "type_parameter";

// Types
pub const IDENTIFIER: &str = "identifier";
pub const GENERIC_NAME: &str = "generic_name";
pub const QUALIFIED_NAME: &str = "qualified_name";
pub const ALIAS_QUALIFIED_NAME: &str = "alias_qualified_name";
pub const PREDEFINED_TYPE: &str = "predefined_type";
pub const NULLABLE_TYPE: &str = "nullable_type";
pub const ARRAY_TYPE: &str = "array_type";
pub const TYPE_ARGUMENT_LIST: &str = "type_argument_list";
pub const DYNAMIC: &str = "dynamic";

// Expressions
pub const LITERAL: &str = "literal";
pub const INTEGER_LITERAL: &str = "integer_literal";
pub const REAL_LITERAL: &str = "real_literal";
pub const CHARACTER_LITERAL: &str = "character_literal";
pub const STRING_LITERAL: &str = "string_literal";
pub const VERBATIM_STRING_LITERAL: &str = "verbatim_string_literal";
pub const RAW_STRING_LITERAL: &str = "raw_string_literal";
pub const BOOLEAN_LITERAL: &str = "boolean_literal";
pub const NULL_LITERAL: &str = "null_literal";
pub const DEFAULT_EXPRESSION: &str = "default_expression";
pub const PREFIX_UNARY_EXPRESSION: &str = "prefix_unary_expression";
pub const BINARY_EXPRESSION: &str = "binary_expression";
pub const PARENTHESIZED_EXPRESSION: &str = "parenthesized_expression";
pub const ARGUMENT_LIST: &str = "argument_list";
pub const ATTRIBUTE_LIST: &str = "attribute_list";
pub const PREPROC_IF: &str = "preproc_if";
pub const PREPROC_ELIF: &str = "preproc_elif";
pub const PREPROC_ELSE: &str = "preproc_else";
