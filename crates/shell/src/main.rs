//! `shopfront` — command-line shell over the storefront client.
//!
//! Wires the HTTP client, file-backed storage and the stores together and
//! exposes them as subcommands. State (credential, guest session, store
//! slices) persists in one JSON file between invocations, so a login
//! followed by `cart add` behaves like one continuing session.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};
use shopfront_api::{ApiClient, Notifier, OrdersApi, ProductsApi, TracingNotifier};
use shopfront_core::{CartItemId, Money, OrderId, ProductId};
use shopfront_models::{
    LoginRequest, OrderQuery, PaymentMethod, ProductQuery, RegisterRequest, ShippingAddressInput,
};
use shopfront_storage::{ClientStorage, FileStorage};
use shopfront_stores::{
    AuthStore, CartStore, CheckoutStep, CheckoutStore, PaymentFlow, PaymentHandoff, WishlistStore,
};

#[derive(Parser)]
#[command(name = "shopfront", version, about = "Storefront client shell")]
struct Cli {
    /// Backend base URL.
    #[arg(
        long,
        env = "SHOPFRONT_API_URL",
        default_value = "http://localhost:3001/api"
    )]
    api_url: String,

    /// Client state file; defaults to the per-user app-data location.
    #[arg(long, env = "SHOPFRONT_STATE_FILE")]
    state_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sign in and store the credential.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account and sign in.
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        phone: Option<String>,
    },
    /// Sign out and discard the credential.
    Logout,
    /// Show the account behind the stored credential.
    Whoami,
    /// Cart operations.
    Cart {
        #[command(subcommand)]
        command: CartCommand,
    },
    /// Wishlist operations.
    Wishlist {
        #[command(subcommand)]
        command: WishlistCommand,
    },
    /// Catalog browsing.
    Products {
        #[command(subcommand)]
        command: ProductsCommand,
    },
    /// Order history.
    Orders {
        #[command(subcommand)]
        command: OrdersCommand,
    },
    /// Place an order from the current cart.
    Checkout(CheckoutArgs),
    /// Payment status of an order.
    Payment {
        order_id: OrderId,
        /// Poll until the status leaves pending.
        #[arg(long)]
        wait: bool,
    },
}

#[derive(Subcommand)]
enum CartCommand {
    /// Fetch and print the cart.
    Show,
    Add {
        product_id: ProductId,
        #[arg(long, default_value_t = 1)]
        quantity: u32,
    },
    Update {
        item_id: CartItemId,
        quantity: u32,
    },
    Remove {
        item_id: CartItemId,
    },
    Clear,
    /// Fold the guest cart into the signed-in user's cart.
    Merge,
}

#[derive(Subcommand)]
enum WishlistCommand {
    Show,
    Add { product_id: ProductId },
    Remove { product_id: ProductId },
    /// Move a wishlist product into the cart.
    Move { product_id: ProductId },
    Clear,
}

#[derive(Subcommand)]
enum ProductsCommand {
    List {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        min_price: Option<Money>,
        #[arg(long)]
        max_price: Option<Money>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
    Show {
        slug: String,
    },
    Featured,
    Categories,
}

#[derive(Subcommand)]
enum OrdersCommand {
    List {
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
    Show {
        order_id: OrderId,
    },
    Cancel {
        order_id: OrderId,
    },
}

#[derive(Args)]
struct CheckoutArgs {
    #[command(flatten)]
    address: AddressArgs,
    #[arg(long, value_enum, default_value_t = MethodArg::Cod)]
    method: MethodArg,
    #[arg(long)]
    notes: Option<String>,
    /// Poll the payment status after the gateway handoff.
    #[arg(long)]
    wait: bool,
}

#[derive(Args)]
struct AddressArgs {
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    address_line1: String,
    #[arg(long)]
    address_line2: Option<String>,
    #[arg(long)]
    city: String,
    #[arg(long)]
    state: Option<String>,
    #[arg(long)]
    postal_code: Option<String>,
    #[arg(long)]
    country: String,
}

impl From<AddressArgs> for ShippingAddressInput {
    fn from(args: AddressArgs) -> Self {
        ShippingAddressInput {
            first_name: args.first_name,
            last_name: args.last_name,
            email: args.email,
            phone: args.phone,
            address_line1: args.address_line1,
            address_line2: args.address_line2,
            city: args.city,
            state: args.state,
            postal_code: args.postal_code,
            country: args.country,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MethodArg {
    Cod,
    Stripe,
    Vnpay,
}

impl From<MethodArg> for PaymentMethod {
    fn from(value: MethodArg) -> Self {
        match value {
            MethodArg::Cod => PaymentMethod::Cod,
            MethodArg::Stripe => PaymentMethod::Stripe,
            MethodArg::Vnpay => PaymentMethod::Vnpay,
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shopfront_observability::init();
    let cli = Cli::parse();

    let storage: Arc<dyn ClientStorage> = match &cli.state_file {
        Some(path) => Arc::new(FileStorage::open(path)?),
        None => Arc::new(FileStorage::open_default()?),
    };
    let notifier: Arc<dyn Notifier> = Arc::new(TracingNotifier);
    let client = Arc::new(ApiClient::new(
        cli.api_url.clone(),
        storage.clone(),
        notifier.clone(),
    ));

    match cli.command {
        Command::Login { email, password } => {
            let mut auth = AuthStore::new(client.clone(), storage.clone(), notifier.clone());
            auth.login(&LoginRequest { email, password }).await?;
            // fold any guest cart into the freshly signed-in account
            let mut cart = CartStore::new(client, storage, notifier);
            cart.merge_cart().await;
            print_json(&auth.user())?;
        }
        Command::Register {
            email,
            password,
            first_name,
            last_name,
            phone,
        } => {
            let mut auth = AuthStore::new(client, storage, notifier);
            auth.register(&RegisterRequest {
                email,
                password,
                first_name,
                last_name,
                phone,
            })
            .await?;
            print_json(&auth.user())?;
        }
        Command::Logout => {
            let mut auth = AuthStore::new(client.clone(), storage.clone(), notifier.clone());
            auth.logout().await;
            // wishlist membership is account-scoped
            let mut wishlist = WishlistStore::new(client, storage, notifier);
            wishlist.reset();
        }
        Command::Whoami => {
            let mut auth = AuthStore::new(client, storage, notifier);
            auth.check_auth().await;
            match auth.user() {
                Some(user) => print_json(user)?,
                None => println!("not signed in"),
            }
        }
        Command::Cart { command } => {
            let mut cart = CartStore::new(client, storage, notifier);
            match command {
                CartCommand::Show => cart.fetch_cart().await,
                CartCommand::Add {
                    product_id,
                    quantity,
                } => cart.add_item(product_id, quantity).await?,
                CartCommand::Update { item_id, quantity } => {
                    cart.update_quantity(item_id, quantity).await?
                }
                CartCommand::Remove { item_id } => cart.remove_item(item_id).await?,
                CartCommand::Clear => cart.clear_cart().await?,
                CartCommand::Merge => cart.merge_cart().await,
            }
            print_json(cart.state())?;
        }
        Command::Wishlist { command } => {
            let mut wishlist = WishlistStore::new(client.clone(), storage.clone(), notifier.clone());
            match command {
                WishlistCommand::Show => wishlist.fetch_wishlist().await,
                WishlistCommand::Add { product_id } => wishlist.add_product(product_id).await?,
                WishlistCommand::Remove { product_id } => {
                    wishlist.remove_product(product_id).await?
                }
                WishlistCommand::Move { product_id } => {
                    let mut cart = CartStore::new(client, storage, notifier);
                    wishlist.move_to_cart(product_id, &mut cart).await?;
                }
                WishlistCommand::Clear => wishlist.clear().await?,
            }
            print_json(&wishlist.items())?;
        }
        Command::Products { command } => match command {
            ProductsCommand::List {
                search,
                category,
                min_price,
                max_price,
                page,
                limit,
            } => {
                let query = ProductQuery {
                    page,
                    limit,
                    category,
                    min_price,
                    max_price,
                    search,
                    ..ProductQuery::default()
                };
                print_json(&client.list_products(&query).await?)?;
            }
            ProductsCommand::Show { slug } => {
                print_json(&client.get_product_by_slug(&slug).await?)?;
            }
            ProductsCommand::Featured => print_json(&client.featured_products().await?)?,
            ProductsCommand::Categories => print_json(&client.list_categories().await?)?,
        },
        Command::Orders { command } => match command {
            OrdersCommand::List { page, limit } => {
                let query = OrderQuery {
                    page,
                    limit,
                    ..OrderQuery::default()
                };
                print_json(&client.list_orders(&query).await?)?;
            }
            OrdersCommand::Show { order_id } => print_json(&client.get_order(order_id).await?)?,
            OrdersCommand::Cancel { order_id } => {
                print_json(&client.cancel_order(order_id).await?)?
            }
        },
        Command::Checkout(args) => checkout(client, storage, notifier, args).await?,
        Command::Payment { order_id, wait } => {
            let flow = PaymentFlow::new(client);
            let view = if wait {
                flow.await_settlement(order_id, 30, Duration::from_secs(2))
                    .await?
            } else {
                flow.await_settlement(order_id, 1, Duration::ZERO).await?
            };
            print_json(&view)?;
        }
    }

    Ok(())
}

async fn checkout(
    client: Arc<ApiClient>,
    storage: Arc<dyn ClientStorage>,
    notifier: Arc<dyn Notifier>,
    args: CheckoutArgs,
) -> anyhow::Result<()> {
    let mut cart = CartStore::new(client.clone(), storage, notifier.clone());
    cart.fetch_cart().await;

    let mut checkout = CheckoutStore::new(client.clone(), notifier);
    checkout.set_shipping_address(args.address.into());
    checkout.set_payment_method(args.method.into());
    checkout.set_notes(args.notes);
    checkout.go_to(CheckoutStep::Review)?;

    let order = checkout.submit_order(&mut cart).await?;
    print_json(&order)?;

    let flow = PaymentFlow::new(client);
    match flow.start(&order).await? {
        PaymentHandoff::CashOnDelivery => println!("payment due on delivery"),
        PaymentHandoff::Stripe(intent) => {
            println!("confirm the Stripe intent with the gateway SDK:");
            print_json(&intent)?;
        }
        PaymentHandoff::VnpayRedirect(url) => {
            println!("complete payment at: {}", url.payment_url);
        }
    }

    if args.wait {
        let view = flow
            .await_settlement(order.id, 30, Duration::from_secs(2))
            .await?;
        print_json(&view)?;
    }

    Ok(())
}
