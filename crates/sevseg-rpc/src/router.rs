//! Route table: (name, method) → handler descriptor.

use crate::error::{HandlerError, RegisterError};
use crate::handler::{Action, PropertyHandler};
use crate::http::Method;
use crate::request::RpcRequest;
use crate::response::ResponseWriter;

/// Handler descriptor, polymorphic over the two endpoint kinds.
#[derive(Clone, Copy)]
pub enum Endpoint<'a> {
    /// Arbitrary request → formatted response.
    Action(&'a dyn Action),
    /// Typed getter/setter pair behind the property adapter.
    Property(&'a dyn PropertyHandler),
}

impl Endpoint<'_> {
    /// Uniform invocation contract for both endpoint kinds.
    pub fn handle(
        &self,
        request: &RpcRequest<'_>,
        out: &mut ResponseWriter<'_>,
    ) -> Result<(), HandlerError> {
        match self {
            Endpoint::Action(action) => action.invoke(request, out),
            Endpoint::Property(property) => match request.method {
                Method::Get => property.read(out),
                _ => property.write(request.body, out),
            },
        }
    }
}

struct Route<'a> {
    name: &'a str,
    method: Method,
    endpoint: Endpoint<'a>,
}

/// Fixed-capacity dispatch table.
///
/// Populated before serving begins; lookups never mutate, so serving tasks
/// share the table without synchronization.
pub struct RouteTable<'a, const MAX_HANDLERS: usize> {
    routes: heapless::Vec<Route<'a>, MAX_HANDLERS>,
}

impl<'a, const MAX_HANDLERS: usize> RouteTable<'a, MAX_HANDLERS> {
    pub const fn new() -> Self {
        Self {
            routes: heapless::Vec::new(),
        }
    }

    fn contains(&self, name: &str, method: Method) -> bool {
        self.routes
            .iter()
            .any(|route| route.name == name && route.method == method)
    }

    /// Register a single (name, method) endpoint.
    pub fn register(
        &mut self,
        name: &'a str,
        method: Method,
        endpoint: Endpoint<'a>,
    ) -> Result<(), RegisterError> {
        if self.contains(name, method) {
            return Err(RegisterError::DuplicateRoute);
        }
        self.routes
            .push(Route {
                name,
                method,
                endpoint,
            })
            .map_err(|_| RegisterError::CapacityExceeded)
    }

    /// Register the GET/POST pair for a property.
    pub fn register_property(
        &mut self,
        name: &'a str,
        property: &'a dyn PropertyHandler,
    ) -> Result<(), RegisterError> {
        if self.contains(name, Method::Get) || self.contains(name, Method::Post) {
            return Err(RegisterError::DuplicateRoute);
        }
        if self.routes.len() + 2 > MAX_HANDLERS {
            return Err(RegisterError::CapacityExceeded);
        }
        // Both pushes are now infallible.
        self.register(name, Method::Get, Endpoint::Property(property))?;
        self.register(name, Method::Post, Endpoint::Property(property))
    }

    /// Resolve a (name, method) pair.
    pub fn lookup(&self, name: &str, method: Method) -> Option<Endpoint<'a>> {
        self.routes
            .iter()
            .find(|route| route.name == name && route.method == method)
            .map(|route| route.endpoint)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<const MAX_HANDLERS: usize> Default for RouteTable<'_, MAX_HANDLERS> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;
    use core::fmt::Write as _;

    use super::*;
    use crate::handler::Property;

    struct OkAction;

    impl Action for OkAction {
        fn invoke(
            &self,
            _request: &RpcRequest<'_>,
            out: &mut ResponseWriter<'_>,
        ) -> Result<(), HandlerError> {
            write!(out, "ok")?;
            Ok(())
        }
    }

    static OK_ACTION: OkAction = OkAction;

    #[test]
    fn duplicate_routes_are_rejected() {
        let mut table: RouteTable<'_, 4> = RouteTable::new();
        table
            .register("up", Method::Post, Endpoint::Action(&OK_ACTION))
            .unwrap();
        assert_eq!(
            table.register("up", Method::Post, Endpoint::Action(&OK_ACTION)),
            Err(RegisterError::DuplicateRoute)
        );
        // Same name under another method is a distinct route.
        table
            .register("up", Method::Get, Endpoint::Action(&OK_ACTION))
            .unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn capacity_is_enforced() {
        let mut table: RouteTable<'_, 1> = RouteTable::new();
        table
            .register("up", Method::Post, Endpoint::Action(&OK_ACTION))
            .unwrap();
        assert_eq!(
            table.register("down", Method::Post, Endpoint::Action(&OK_ACTION)),
            Err(RegisterError::CapacityExceeded)
        );
    }

    #[test]
    fn lookup_discriminates_on_method() {
        let mut table: RouteTable<'_, 4> = RouteTable::new();
        table
            .register("count", Method::Get, Endpoint::Action(&OK_ACTION))
            .unwrap();
        assert!(table.lookup("count", Method::Get).is_some());
        assert!(table.lookup("count", Method::Post).is_none());
        assert!(table.lookup("missing", Method::Get).is_none());
    }

    struct TestProperty {
        value: Cell<u16>,
    }

    impl Property for TestProperty {
        type Value = u16;

        fn get(&self) -> u16 {
            self.value.get()
        }

        fn set(&self, value: u16) {
            self.value.set(value);
        }
    }

    #[test]
    fn property_registers_a_get_post_pair() {
        let property = TestProperty { value: Cell::new(5) };
        let mut table: RouteTable<'_, 4> = RouteTable::new();
        table.register_property("brightness", &property).unwrap();
        assert_eq!(table.len(), 2);

        let mut buf = [0u8; 8];
        let mut out = ResponseWriter::new(&mut buf);
        let endpoint = table.lookup("brightness", Method::Get).unwrap();
        endpoint
            .handle(
                &RpcRequest {
                    method: Method::Get,
                    name: "brightness",
                    body: b"",
                },
                &mut out,
            )
            .unwrap();
        assert_eq!(out.as_bytes(), b"5");

        out.clear();
        let endpoint = table.lookup("brightness", Method::Post).unwrap();
        endpoint
            .handle(
                &RpcRequest {
                    method: Method::Post,
                    name: "brightness",
                    body: b"9",
                },
                &mut out,
            )
            .unwrap();
        assert_eq!(out.as_bytes(), b"9");
        assert_eq!(property.value.get(), 9);
    }

    #[test]
    fn property_pair_needs_two_free_slots() {
        let property = TestProperty { value: Cell::new(0) };
        let mut table: RouteTable<'_, 3> = RouteTable::new();
        table
            .register("up", Method::Post, Endpoint::Action(&OK_ACTION))
            .unwrap();
        table
            .register("down", Method::Post, Endpoint::Action(&OK_ACTION))
            .unwrap();
        assert_eq!(
            table.register_property("brightness", &property),
            Err(RegisterError::CapacityExceeded)
        );
        // The failed registration must not leave half a pair behind.
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn property_name_collides_with_existing_route() {
        let property = TestProperty { value: Cell::new(0) };
        let mut table: RouteTable<'_, 4> = RouteTable::new();
        table
            .register("brightness", Method::Get, Endpoint::Action(&OK_ACTION))
            .unwrap();
        assert_eq!(
            table.register_property("brightness", &property),
            Err(RegisterError::DuplicateRoute)
        );
        assert_eq!(table.len(), 1);
    }
}
