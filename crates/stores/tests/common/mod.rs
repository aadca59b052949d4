//! In-memory fakes and fixtures shared by the store integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use shopfront_api::{
    ApiError, AuthApi, CartApi, Notifier, OrdersApi, PaymentsApi, WishlistApi,
};
use shopfront_core::{CartId, CartItemId, Money, OrderId, ProductId, UserId, line_total};
use shopfront_models::{
    AddToCartRequest, AuthSession, Cart, CartItem, CartItemProduct, CreateOrderRequest,
    LoginRequest, Order, OrderQuery, OrdersResponse, PaymentStatus, PaymentStatusView,
    RegisterRequest, Role, StripeConfig, StripePaymentIntent, UpdateCartItemRequest, User,
    VnpayPaymentUrl, WishlistItem, WishlistProduct, WishlistResponse,
};

// --- fixtures ---------------------------------------------------------

pub fn money(s: &str) -> Money {
    s.parse().unwrap()
}

pub fn cart_line(name: &str, unit: &str, quantity: u32) -> CartItem {
    let price = money(unit);
    let product_id = ProductId::new();
    CartItem {
        id: CartItemId::new(),
        product_id,
        product: CartItemProduct {
            id: product_id,
            name: name.into(),
            slug: name.to_lowercase(),
            price,
            compare_price: None,
            stock_quantity: 100,
            image: None,
        },
        quantity,
        price,
        line_total: line_total(price, quantity),
    }
}

pub fn cart_with(items: Vec<CartItem>) -> Cart {
    let mut cart = Cart {
        id: CartId::new(),
        items,
        subtotal: Money::ZERO,
        item_count: 0,
    };
    recompute(&mut cart);
    cart
}

pub fn empty_cart() -> Cart {
    cart_with(vec![])
}

fn recompute(cart: &mut Cart) {
    cart.subtotal = cart.items.iter().map(|item| item.line_total).sum();
    cart.item_count = cart.items.iter().map(|item| item.quantity).sum();
}

pub fn wishlist_entry(name: &str, unit: &str) -> WishlistItem {
    let product_id = ProductId::new();
    WishlistItem {
        id: uuid::Uuid::now_v7(),
        product_id,
        created_at: Utc::now(),
        product: WishlistProduct {
            id: product_id,
            name: name.into(),
            slug: name.to_lowercase(),
            price: money(unit),
            compare_price: None,
            stock_quantity: 100,
            is_active: true,
            images: None,
        },
    }
}

pub fn user_fixture(first_name: &str) -> User {
    User {
        id: UserId::new(),
        email: format!("{}@example.com", first_name.to_lowercase()),
        first_name: first_name.into(),
        last_name: "Tester".into(),
        phone: None,
        role: Role::Customer,
        is_active: true,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn order_fixture(payment_method: &str) -> Order {
    Order {
        id: OrderId::new(),
        user_id: UserId::new(),
        order_number: "SO-1001".into(),
        status: shopfront_models::OrderStatus::Pending,
        payment_status: PaymentStatus::Pending,
        payment_method: payment_method.into(),
        subtotal: money("20.00"),
        shipping_fee: money("5.00"),
        tax: Money::ZERO,
        discount: Money::ZERO,
        total: money("25.00"),
        currency: "USD".into(),
        notes: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
        items: vec![],
        shipping_address: None,
        user: None,
    }
}

pub fn status_view(order: &Order, payment_status: PaymentStatus) -> PaymentStatusView {
    PaymentStatusView {
        order_id: order.id,
        order_number: order.order_number.clone(),
        payment_status,
        payment_method: order.payment_method.clone(),
        total: order.total,
    }
}

pub fn address_fixture() -> shopfront_models::ShippingAddressInput {
    shopfront_models::ShippingAddressInput {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: None,
        phone: None,
        address_line1: "1 Analytical Way".into(),
        address_line2: None,
        city: "London".into(),
        state: None,
        postal_code: None,
        country: "GB".into(),
    }
}

// --- notifier ---------------------------------------------------------

/// Notifier that records every notice for assertions.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    successes: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn successes(&self) -> Vec<String> {
        self.successes.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.successes.lock().unwrap().push(message.into());
    }

    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.into());
    }
}

// --- cart fake --------------------------------------------------------

/// Cart backend fake: applies mutations to an in-memory cart the way the
/// real backend would, recomputing totals server-side. `fail_next` makes
/// exactly one upcoming call fail with a stock validation error.
pub struct FakeCartApi {
    cart: Mutex<Cart>,
    merged: Mutex<Option<Cart>>,
    fail_next: AtomicBool,
    pub fetches: AtomicUsize,
}

impl FakeCartApi {
    pub fn new(cart: Cart) -> Self {
        Self {
            cart: Mutex::new(cart),
            merged: Mutex::new(None),
            fail_next: AtomicBool::new(false),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    pub fn set_cart(&self, cart: Cart) {
        *self.cart.lock().unwrap() = cart;
    }

    pub fn set_merged(&self, cart: Cart) {
        *self.merged.lock().unwrap() = Some(cart);
    }

    pub fn snapshot(&self) -> Cart {
        self.cart.lock().unwrap().clone()
    }

    fn take_failure(&self) -> Result<(), ApiError> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            Err(ApiError::Validation("Insufficient stock".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CartApi for FakeCartApi {
    async fn fetch_cart(&self) -> Result<Cart, ApiError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.take_failure()?;
        Ok(self.snapshot())
    }

    async fn add_to_cart(&self, req: &AddToCartRequest) -> Result<Cart, ApiError> {
        self.take_failure()?;
        let mut cart = self.cart.lock().unwrap();
        if let Some(item) = cart
            .items
            .iter_mut()
            .find(|item| item.product_id == req.product_id)
        {
            item.quantity += req.quantity;
            item.line_total = line_total(item.price, item.quantity);
        } else {
            let mut line = cart_line("Added", "10.00", req.quantity);
            line.product_id = req.product_id;
            line.product.id = req.product_id;
            cart.items.push(line);
        }
        recompute(&mut cart);
        Ok(cart.clone())
    }

    async fn update_cart_item(
        &self,
        item_id: CartItemId,
        req: &UpdateCartItemRequest,
    ) -> Result<Cart, ApiError> {
        self.take_failure()?;
        let mut cart = self.cart.lock().unwrap();
        let item = cart
            .items
            .iter_mut()
            .find(|item| item.id == item_id)
            .ok_or(ApiError::NotFound)?;
        item.quantity = req.quantity;
        item.line_total = line_total(item.price, req.quantity);
        recompute(&mut cart);
        Ok(cart.clone())
    }

    async fn remove_cart_item(&self, item_id: CartItemId) -> Result<Cart, ApiError> {
        self.take_failure()?;
        let mut cart = self.cart.lock().unwrap();
        cart.items.retain(|item| item.id != item_id);
        recompute(&mut cart);
        Ok(cart.clone())
    }

    async fn clear_cart(&self) -> Result<Cart, ApiError> {
        self.take_failure()?;
        let mut cart = self.cart.lock().unwrap();
        cart.items.clear();
        recompute(&mut cart);
        Ok(cart.clone())
    }

    async fn merge_cart(&self) -> Result<Cart, ApiError> {
        self.take_failure()?;
        let merged = self.merged.lock().unwrap().clone();
        if let Some(merged) = merged {
            *self.cart.lock().unwrap() = merged;
        }
        Ok(self.snapshot())
    }
}

// --- wishlist fake ----------------------------------------------------

pub struct FakeWishlistApi {
    items: Mutex<Vec<WishlistItem>>,
    fail_next: AtomicBool,
}

impl FakeWishlistApi {
    pub fn new(items: Vec<WishlistItem>) -> Self {
        Self {
            items: Mutex::new(items),
            fail_next: AtomicBool::new(false),
        }
    }

    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    fn take_failure(&self) -> Result<(), ApiError> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            Err(ApiError::Server(500))
        } else {
            Ok(())
        }
    }

    fn response(&self) -> WishlistResponse {
        let items = self.items.lock().unwrap().clone();
        let count = items.len() as u32;
        WishlistResponse { items, count }
    }
}

#[async_trait]
impl WishlistApi for FakeWishlistApi {
    async fn fetch_wishlist(&self) -> Result<WishlistResponse, ApiError> {
        self.take_failure()?;
        Ok(self.response())
    }

    async fn add_to_wishlist(&self, product_id: ProductId) -> Result<WishlistResponse, ApiError> {
        self.take_failure()?;
        {
            let mut items = self.items.lock().unwrap();
            if !items.iter().any(|item| item.product_id == product_id) {
                let mut entry = wishlist_entry("Wished", "15.00");
                entry.product_id = product_id;
                entry.product.id = product_id;
                items.push(entry);
            }
        }
        Ok(self.response())
    }

    async fn remove_from_wishlist(&self, product_id: ProductId) -> Result<(), ApiError> {
        self.take_failure()?;
        self.items
            .lock()
            .unwrap()
            .retain(|item| item.product_id != product_id);
        Ok(())
    }

    async fn move_to_cart(&self, product_id: ProductId) -> Result<(), ApiError> {
        self.take_failure()?;
        self.items
            .lock()
            .unwrap()
            .retain(|item| item.product_id != product_id);
        Ok(())
    }

    async fn clear_wishlist(&self) -> Result<(), ApiError> {
        self.take_failure()?;
        self.items.lock().unwrap().clear();
        Ok(())
    }
}

// --- orders fake ------------------------------------------------------

pub struct FakeOrdersApi {
    outcome: Mutex<Option<Result<Order, ApiError>>>,
    pub created: AtomicUsize,
}

impl FakeOrdersApi {
    pub fn new(outcome: Result<Order, ApiError>) -> Self {
        Self {
            outcome: Mutex::new(Some(outcome)),
            created: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl OrdersApi for FakeOrdersApi {
    async fn create_order(&self, _req: &CreateOrderRequest) -> Result<Order, ApiError> {
        self.created.fetch_add(1, Ordering::SeqCst);
        self.outcome
            .lock()
            .unwrap()
            .take()
            .unwrap_or(Err(ApiError::Server(500)))
    }

    async fn list_orders(&self, _query: &OrderQuery) -> Result<OrdersResponse, ApiError> {
        Err(ApiError::Server(500))
    }

    async fn get_order(&self, _order_id: OrderId) -> Result<Order, ApiError> {
        Err(ApiError::Server(500))
    }

    async fn cancel_order(&self, _order_id: OrderId) -> Result<Order, ApiError> {
        Err(ApiError::Server(500))
    }
}

// --- payments fake ----------------------------------------------------

pub struct FakePaymentsApi {
    statuses: Mutex<VecDeque<PaymentStatusView>>,
    pub polls: AtomicUsize,
}

impl FakePaymentsApi {
    pub fn new(statuses: Vec<PaymentStatusView>) -> Self {
        Self {
            statuses: Mutex::new(statuses.into()),
            polls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl PaymentsApi for FakePaymentsApi {
    async fn stripe_config(&self) -> Result<StripeConfig, ApiError> {
        Ok(StripeConfig {
            publishable_key: "pk_test_123".into(),
        })
    }

    async fn create_stripe_intent(
        &self,
        _order_id: OrderId,
    ) -> Result<StripePaymentIntent, ApiError> {
        Ok(StripePaymentIntent {
            client_secret: "cs_test_123".into(),
            payment_intent_id: "pi_test_123".into(),
            amount: money("25.00"),
            currency: "USD".into(),
        })
    }

    async fn create_vnpay_url(&self, _order_id: OrderId) -> Result<VnpayPaymentUrl, ApiError> {
        Ok(VnpayPaymentUrl {
            payment_url: "https://pay.example.com/redirect".into(),
            order_number: "SO-1001".into(),
        })
    }

    async fn payment_status(&self, _order_id: OrderId) -> Result<PaymentStatusView, ApiError> {
        self.polls.fetch_add(1, Ordering::SeqCst);
        let mut statuses = self.statuses.lock().unwrap();
        if statuses.len() > 1 {
            Ok(statuses.pop_front().unwrap())
        } else {
            statuses.front().cloned().ok_or(ApiError::NotFound)
        }
    }
}

// --- auth fake --------------------------------------------------------

pub struct FakeAuthApi {
    user: User,
    token: String,
    fail_next: AtomicBool,
    pub me_calls: AtomicUsize,
}

impl FakeAuthApi {
    pub fn new(user: User, token: &str) -> Self {
        Self {
            user,
            token: token.into(),
            fail_next: AtomicBool::new(false),
            me_calls: AtomicUsize::new(0),
        }
    }

    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    fn take_failure(&self) -> Result<(), ApiError> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            Err(ApiError::Unauthorized)
        } else {
            Ok(())
        }
    }

    fn session(&self) -> AuthSession {
        AuthSession {
            access_token: self.token.clone(),
            user: self.user.clone(),
        }
    }
}

#[async_trait]
impl AuthApi for FakeAuthApi {
    async fn login(&self, _req: &LoginRequest) -> Result<AuthSession, ApiError> {
        self.take_failure()?;
        Ok(self.session())
    }

    async fn register(&self, _req: &RegisterRequest) -> Result<AuthSession, ApiError> {
        self.take_failure()?;
        Ok(self.session())
    }

    async fn logout(&self) -> Result<(), ApiError> {
        Ok(())
    }

    async fn me(&self) -> Result<User, ApiError> {
        self.me_calls.fetch_add(1, Ordering::SeqCst);
        self.take_failure()?;
        Ok(self.user.clone())
    }

    async fn forgot_password(&self, _email: &str) -> Result<(), ApiError> {
        self.take_failure()
    }

    async fn reset_password(&self, _token: &str, _new_password: &str) -> Result<(), ApiError> {
        self.take_failure()
    }
}
