use super::{Builtin, Context, Outcome};
use crate::error::ShellResult;
use crate::process::cd::Cd;
use crate::process::echo::Echo;
use crate::process::exit::Exit;
use crate::process::pwd::Pwd;
use crate::process::r#type::Type;
use crate::process::sink::Streams;
use std::collections::{BTreeSet, HashMap};

/// Fixed table of builtin commands, filled once at construction.
pub struct BuiltinMap {
    func_map: HashMap<&'static str, Box<dyn Builtin>>,
}

impl BuiltinMap {
    /// Build the registry with every builtin the shell provides.
    pub fn new() -> Self {
        let mut builtin = BuiltinMap {
            func_map: HashMap::new(),
        };

        builtin.add("cd", Box::new(Cd::new()));
        builtin.add("echo", Box::new(Echo::new()));
        builtin.add("exit", Box::new(Exit::new()));
        builtin.add("pwd", Box::new(Pwd::new()));
        builtin.add("type", Box::new(Type::new()));
        builtin
    }

    fn add(&mut self, func_name: &'static str, func: Box<dyn Builtin>) {
        self.func_map.insert(func_name, func);
    }

    pub fn lookup(&self, func_name: &str) -> Option<&dyn Builtin> {
        self.func_map.get(func_name).map(|func| func.as_ref())
    }

    pub fn contains(&self, func_name: &str) -> bool {
        self.func_map.contains_key(func_name)
    }

    /// Names of all builtins, sorted.
    pub fn names(&self) -> BTreeSet<&'static str> {
        self.func_map.keys().copied().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.func_map.is_empty()
    }

    /// Run the builtin named by `args[0]`, or return `None` if there is none.
    pub fn invoke(&self, args: &[String], streams: &mut Streams) -> Option<ShellResult<Outcome>> {
        let builtin = self.lookup(args.first()?)?;
        let mut ctx = Context {
            builtins: self,
            streams,
        };
        Some(builtin.call(&mut ctx, args))
    }
}

impl Default for BuiltinMap {
    fn default() -> Self {
        Self::new()
    }
}
