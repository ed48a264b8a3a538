//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global `tracing` subscriber used by the
//! extension binary.
//!
//! - **Structured logging**: every actor and validator event carries fields
//!   (`entity_type`, `id`, `sku`, `status`, ...) rather than formatted text.
//! - **Configurable log levels** via the `RUST_LOG` environment variable,
//!   falling back to `info`.
//! - **Compact format**: module paths are hidden; spans are rendered inline.
//!
//! ```bash
//! RUST_LOG=info cargo run -p cart-extension
//! RUST_LOG=debug cargo run -p cart-extension   # includes lookup payloads
//! RUST_LOG=cart_extension=debug,tower_http=info cargo run -p cart-extension
//! ```
//!
//! With `RUST_LOG=debug` an update validation renders roughly as:
//!
//! ```text
//! DEBUG dispatch: Checking inventory action="Update" sku="ABC" quantity=5
//! DEBUG Get entity_type="InventoryEntry" id=ABC found=true
//!  WARN dispatch: Insufficient stock action="Update" sku="ABC" quantity=5 available=3
//!  INFO dispatch: Cart rejected action="Update" status=400 reason=stock level for ABC is less than 5
//! ```

use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();
}
