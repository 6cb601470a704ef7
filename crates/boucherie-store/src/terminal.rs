//! # Terminal Module
//!
//! The single point-of-sale terminal: catalog, cart, ledger, session and
//! storage composed behind the one surface the frontend is allowed to
//! call.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Checkout Flow                                    │
//! │                                                                         │
//! │  Frontend Action           Terminal Call           State Change         │
//! │  ───────────────           ─────────────           ────────────         │
//! │                                                                         │
//! │  Tap product ────────────► add_to_cart() ────────► cart line merged     │
//! │  Edit quantity ──────────► update_quantity() ────► line set/removed     │
//! │  Tap remove ─────────────► remove_from_cart() ───► line removed         │
//! │  "Encaissement" ─────────► cart_total() ─────────► (read only)          │
//! │  "Valider" ──────────────► checkout(received) ───► ONE atomic step:     │
//! │                                                    validate → append    │
//! │                                                    → persist → clear    │
//! │                                                                         │
//! │  Validation happens before any mutation; after it, nothing can fail.    │
//! │  There is no observable state where the sale exists but the cart        │
//! │  still has lines, or the reverse.                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info, warn};

use crate::error::{StorageError, TerminalError, TerminalResult};
use crate::ledger::Ledger;
use crate::session::Session;
use crate::storage::{JsonFileStorage, SalesStorage};
use boucherie_core::{Cart, Catalog, Employee, EmployeeDirectory, Money, Quantity, Sale};

/// The point-of-sale terminal.
///
/// Owns the only mutable state in the process: the in-progress cart and
/// the sales ledger. The storage backend is injected so tests run against
/// [`MemoryStorage`](crate::storage::MemoryStorage).
pub struct Terminal {
    catalog: Catalog,
    cart: Cart,
    ledger: Ledger,
    storage: Box<dyn SalesStorage>,
    session: Session,
}

impl Terminal {
    /// Builds a terminal over explicit collaborators, loading the ledger
    /// from storage. Carts are never persisted: every terminal starts with
    /// an empty one.
    pub fn new(
        catalog: Catalog,
        staff: EmployeeDirectory,
        storage: Box<dyn SalesStorage>,
    ) -> Self {
        let ledger = Ledger::load(&*storage);
        Terminal {
            catalog,
            cart: Cart::new(),
            ledger,
            storage,
            session: Session::new(staff),
        }
    }

    /// The production configuration: stock catalog and staff, ledger file
    /// in the OS app-data directory.
    pub fn open() -> Result<Self, StorageError> {
        let storage = JsonFileStorage::at_default_location()?;
        info!(path = %storage.path().display(), "opening terminal");
        Ok(Terminal::new(
            Catalog::butcher_shop(),
            EmployeeDirectory::default_staff(),
            Box::new(storage),
        ))
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Logs an operator in. See [`Session::login`].
    pub fn login(&mut self, employee_id: u32, pin: &str) -> TerminalResult<&Employee> {
        self.session.login(employee_id, pin)
    }

    /// Logs the current operator out.
    pub fn logout(&mut self) {
        self.session.logout();
    }

    /// The currently authenticated operator, if any.
    pub fn operator(&self) -> Option<&Employee> {
        self.session.operator()
    }

    /// The employee directory, for the login screen.
    pub fn staff(&self) -> &EmployeeDirectory {
        self.session.directory()
    }

    fn require_operator(&self) -> TerminalResult<&Employee> {
        self.session.operator().ok_or(TerminalError::NotAuthenticated)
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// The read-only product catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Adds a catalog product to the cart (merging with an existing line).
    /// Requires a logged-in operator.
    pub fn add_to_cart(&mut self, product_id: u32, quantity: Quantity) -> TerminalResult<()> {
        self.require_operator()?;
        let product = self
            .catalog
            .get(product_id)
            .ok_or(TerminalError::UnknownProduct(product_id))?
            .clone();

        self.cart.add(&product, quantity)?;
        debug!(product = %product.name, %quantity, lines = self.cart.line_count(), "added to cart");
        Ok(())
    }

    /// Sets a line's quantity directly; `<= 0` removes the line, an absent
    /// product id is a no-op.
    pub fn update_quantity(&mut self, product_id: u32, quantity: Quantity) -> TerminalResult<()> {
        self.require_operator()?;
        self.cart.update_quantity(product_id, quantity)?;
        Ok(())
    }

    /// Removes a line by product id. No-op if absent.
    pub fn remove_from_cart(&mut self, product_id: u32) -> TerminalResult<()> {
        self.require_operator()?;
        self.cart.remove(product_id);
        Ok(())
    }

    /// Empties the cart without recording anything.
    pub fn clear_cart(&mut self) -> TerminalResult<()> {
        self.require_operator()?;
        self.cart.clear();
        Ok(())
    }

    /// The in-progress cart, read only; mutation goes through the
    /// operations above.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The amount the payment screen quotes.
    pub fn cart_total(&self) -> Money {
        self.cart.total()
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// Finalizes the cart as a sale by the logged-in operator.
    ///
    /// This is the gated entry point the payment screen calls; it resolves
    /// the operator from the session and delegates to
    /// [`Terminal::complete_sale`].
    pub fn checkout(&mut self, amount_received: Money) -> TerminalResult<Sale> {
        let operator = self.require_operator()?;
        let (id, name) = (operator.id, operator.name.clone());
        self.complete_sale(amount_received, id, name)
    }

    /// Converts the cart + payment + operator identity into an immutable
    /// sale: validate, append to the ledger, persist, clear the cart, as
    /// one atomic unit.
    ///
    /// The total is re-derived from the cart at this moment with the same
    /// rounding as [`Terminal::cart_total`]. On any error nothing changes:
    /// validation runs before the first mutation, and after it no step can
    /// fail (a storage write failure is demoted to a warning, and the
    /// in-memory ledger stays authoritative for the session).
    pub fn complete_sale(
        &mut self,
        amount_received: Money,
        employee_id: u32,
        employee_name: impl Into<String>,
    ) -> TerminalResult<Sale> {
        let sale = Sale::finalize(&self.cart, amount_received, employee_id, employee_name)?;

        self.ledger.append(sale.clone());
        if let Err(e) = self.storage.save(self.ledger.sales()) {
            // degraded durability: the session keeps running on memory
            warn!(error = %e, "ledger not persisted; in-memory copy stays authoritative");
        }
        self.cart.clear();

        info!(
            sale_id = %sale.id,
            total = %sale.total,
            change = %sale.change,
            employee = %sale.employee_name,
            lines = sale.items.len(),
            "sale completed"
        );
        Ok(sale)
    }

    // =========================================================================
    // Ledger Queries
    // =========================================================================

    /// The full sale history, newest first.
    pub fn sales_history(&self) -> &[Sale] {
        self.ledger.sales()
    }

    /// Sales recorded on the given local calendar day (`YYYY-MM-DD`).
    pub fn sales_by_date(&self, date_key: &str) -> Vec<Sale> {
        self.ledger.sales_by_date(date_key)
    }

    /// Today's sales.
    pub fn today_sales(&self) -> Vec<Sale> {
        self.ledger.today_sales()
    }

    /// Today's revenue, from stored totals.
    pub fn today_total(&self) -> Money {
        self.ledger.today_total()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
