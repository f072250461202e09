//! Symbol table and scope management for Ra7ma
//!
//! Variables live in lexical scopes (global, function body, block); functions live in one flat global table.
//!
//! ## Notes
//! - Scopes and symbols are stored in arenas. Entering a scope pushes a new [`Scope`] whose `parent` is the current
//!   one; exiting moves back to the parent. An exited scope stays in the arena (so [`SymbolTable::history`] can
//!   report it) but its symbols are unreachable from any later lookup.
//! - Variables and functions share one namespace: a variable may never take a function's name, in any scope, and a
//!   function may not take the name of a variable visible in the current scope.

use std::collections::HashMap;

use ra7ma_core::lang::types::PrimitiveType;
use thiserror::Error;

/// Unique identifier for variable symbols
pub type SymbolId = usize;

/// Unique identifier for scopes
pub type ScopeId = usize;

/// Why a declaration or lookup failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymbolError {
    #[error("Variable '{0}' already declared in this scope")]
    VariableRedeclared(String),
    #[error("Function '{0}' already declared")]
    FunctionRedeclared(String),
    #[error("'{0}' is already declared as a function")]
    NameIsFunction(String),
    #[error("'{0}' is already declared as a variable in this scope")]
    NameIsVariable(String),
    #[error("'{0}' is not declared")]
    NotFound(String),
}

/// Kind of scope
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeKind {
    Global,
    Function(String),
    Block,
}

/// A scope containing variable definitions
#[derive(Debug)]
pub struct Scope {
    pub parent: Option<ScopeId>,
    pub kind: ScopeKind,
    pub symbols: HashMap<String, SymbolId>,
}

impl Scope {
    pub fn new(parent: Option<ScopeId>, kind: ScopeKind) -> Self {
        Self {
            parent,
            kind,
            symbols: HashMap::new(),
        }
    }
}

/// A declared variable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableSymbol {
    pub name: String,
    pub ty: PrimitiveType,
    pub scope: ScopeId,
}

/// Return and parameter types of a function
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSignature {
    pub return_type: PrimitiveType,
    pub parameter_types: Vec<PrimitiveType>,
}

/// Symbol table managing variables and functions
#[derive(Debug)]
pub struct SymbolTable {
    symbols: Vec<VariableSymbol>,
    scopes: Vec<Scope>,
    current_scope: ScopeId,
    functions: HashMap<String, FunctionSignature>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            symbols: Vec::new(),
            scopes: vec![Scope::new(None, ScopeKind::Global)],
            current_scope: 0,
            functions: HashMap::new(),
        }
    }

    /// Enter a new scope
    pub fn enter_scope(&mut self, kind: ScopeKind) {
        tracing::debug!(?kind, depth = self.depth() + 1, "enter scope");
        let new_scope = Scope::new(Some(self.current_scope), kind);
        self.scopes.push(new_scope);
        self.current_scope = self.scopes.len() - 1;
    }

    /// Exit the current scope. At global level this does nothing.
    pub fn exit_scope(&mut self) {
        if let Some(parent) = self.scopes[self.current_scope].parent {
            tracing::debug!(kind = ?self.scopes[self.current_scope].kind, "exit scope");
            self.current_scope = parent;
        }
    }

    /// Declare a variable in the current scope.
    ///
    /// ## Errors
    /// - [`SymbolError::VariableRedeclared`] if the current scope already has `name`.
    /// - [`SymbolError::NameIsFunction`] if `name` is a declared function.
    ///
    /// The table is unchanged on error.
    pub fn declare_variable(&mut self, name: &str, ty: PrimitiveType) -> Result<SymbolId, SymbolError> {
        if self.functions.contains_key(name) {
            return Err(SymbolError::NameIsFunction(name.to_string()));
        }
        if self.lookup_local(name).is_some() {
            return Err(SymbolError::VariableRedeclared(name.to_string()));
        }

        let id = self.symbols.len();
        self.symbols.push(VariableSymbol {
            name: name.to_string(),
            ty,
            scope: self.current_scope,
        });
        self.scopes[self.current_scope].symbols.insert(name.to_string(), id);
        Ok(id)
    }

    /// Declare a function in the global function table.
    ///
    /// ## Errors
    /// - [`SymbolError::FunctionRedeclared`] if a function called `name` exists.
    /// - [`SymbolError::NameIsVariable`] if `name` is a variable in the current scope.
    pub fn declare_function(
        &mut self,
        name: &str,
        return_type: PrimitiveType,
        parameter_types: Vec<PrimitiveType>,
    ) -> Result<(), SymbolError> {
        if self.functions.contains_key(name) {
            return Err(SymbolError::FunctionRedeclared(name.to_string()));
        }
        if self.lookup_local(name).is_some() {
            return Err(SymbolError::NameIsVariable(name.to_string()));
        }
        self.functions.insert(
            name.to_string(),
            FunctionSignature {
                return_type,
                parameter_types,
            },
        );
        Ok(())
    }

    /// `true` if a variable called `name` is visible from the current scope.
    pub fn exists(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// `true` if a function called `name` was declared.
    pub fn function_exists(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Type of the innermost visible variable called `name`.
    pub fn get_variable_type(&self, name: &str) -> Result<PrimitiveType, SymbolError> {
        self.lookup(name)
            .map(|id| self.symbols[id].ty)
            .ok_or_else(|| SymbolError::NotFound(name.to_string()))
    }

    pub fn get_function_signature(&self, name: &str) -> Result<&FunctionSignature, SymbolError> {
        self.functions
            .get(name)
            .ok_or_else(|| SymbolError::NotFound(name.to_string()))
    }

    /// Look up a variable by name in the current scope chain
    pub fn lookup(&self, name: &str) -> Option<SymbolId> {
        let mut scope_idx = self.current_scope;
        loop {
            if let Some(&id) = self.scopes[scope_idx].symbols.get(name) {
                return Some(id);
            }
            scope_idx = self.scopes[scope_idx].parent?;
        }
    }

    /// Look up a variable only in the current scope (no parent lookup)
    pub fn lookup_local(&self, name: &str) -> Option<SymbolId> {
        self.scopes[self.current_scope].symbols.get(name).copied()
    }

    /// Get a variable by ID
    pub fn get(&self, id: SymbolId) -> Option<&VariableSymbol> {
        self.symbols.get(id)
    }

    /// Number of scopes between the current one and the global scope.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut scope_idx = self.current_scope;
        while let Some(parent) = self.scopes[scope_idx].parent {
            depth += 1;
            scope_idx = parent;
        }
        depth
    }

    pub fn current_scope_kind(&self) -> &ScopeKind {
        &self.scopes[self.current_scope].kind
    }

    /// Every scope entered so far, in order (the global scope excluded).
    pub fn history(&self) -> impl Iterator<Item = &ScopeKind> {
        self.scopes.iter().skip(1).map(|scope| &scope.kind)
    }

    /// Variables declared in the global scope, in declaration order.
    pub fn globals(&self) -> impl Iterator<Item = &VariableSymbol> {
        self.symbols.iter().filter(|symbol| symbol.scope == 0)
    }

    /// Declared functions, sorted by name.
    pub fn functions(&self) -> Vec<(&str, &FunctionSignature)> {
        let mut functions: Vec<_> = self
            .functions
            .iter()
            .map(|(name, signature)| (name.as_str(), signature))
            .collect();
        functions.sort_by_key(|(name, _)| *name);
        functions
    }
}
