//! Where the shopper (or admin) currently is.

use retrove_commerce::ids::ProductId;
use retrove_commerce::search::Listing;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Informational pages linked from the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StaticPage {
    Contact,
    #[default]
    Faq,
    Shipping,
    Sizing,
}

impl StaticPage {
    pub const ALL: [StaticPage; 4] = [
        StaticPage::Contact,
        StaticPage::Faq,
        StaticPage::Shipping,
        StaticPage::Sizing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StaticPage::Contact => "contact",
            StaticPage::Faq => "faq",
            StaticPage::Shipping => "shipping",
            StaticPage::Sizing => "sizing",
        }
    }

    /// Page heading.
    pub fn title(&self) -> &'static str {
        match self {
            StaticPage::Contact => "Kontak Kami",
            StaticPage::Faq => "Frequently Asked Questions (FAQ)",
            StaticPage::Shipping => "Pengiriman & Pengembalian",
            StaticPage::Sizing => "Panduan Ukuran",
        }
    }

    /// Page text, one paragraph per line.
    pub fn body(&self) -> &'static [&'static str] {
        match self {
            StaticPage::Contact => &[
                "Punya pertanyaan atau butuh bantuan? Jangan ragu untuk menghubungi kami melalui:",
                "Email: support@retrove.com",
                "WhatsApp: +62 812 3456 7890 (Chat Only)",
                "Instagram: @retrove.id",
                "Jam operasional kami adalah Senin - Jumat, 09:00 - 17:00 WIB.",
            ],
            StaticPage::Faq => &[
                "Bagaimana kondisi barang yang dijual? Setiap item kami kurasi dan periksa dengan teliti. Kami memberikan rating kondisi dan deskripsi jujur tentang setiap kekurangan minor.",
                "Apakah barang bisa dikembalikan? Karena setiap item adalah unik (stok hanya 1), kami tidak menerima pengembalian atau penukaran.",
                "Berapa lama proses pengiriman? Pesanan diproses dalam 1-2 hari kerja setelah pembayaran dikonfirmasi. Pengiriman standar 2-5 hari kerja.",
            ],
            StaticPage::Shipping => &[
                "Biaya pengiriman flat rate sebesar Rp25.000 ke seluruh Indonesia. Nomor resi dikirim melalui email setelah pesanan dikirim.",
                "Semua penjualan bersifat final. Jika ada kesalahan dari pihak kami (salah kirim barang), silakan hubungi customer service.",
            ],
            StaticPage::Sizing => &[
                "Ukuran pada pakaian vintage bisa berbeda dengan ukuran modern. Kami mencantumkan ukuran pada label dan sering memberi detail tambahan seperti \"L fit M\".",
                "Bandingkan dimensi yang kami berikan dengan pakaian yang sudah Anda miliki.",
            ],
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "contact" => Some(StaticPage::Contact),
            "faq" => Some(StaticPage::Faq),
            "shipping" => Some(StaticPage::Shipping),
            "sizing" => Some(StaticPage::Sizing),
            _ => None,
        }
    }
}

/// Sections of the admin console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AdminPage {
    #[default]
    Dashboard,
    Products,
    Orders,
    Categories,
}

impl AdminPage {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminPage::Dashboard => "dashboard",
            AdminPage::Products => "products",
            AdminPage::Orders => "orders",
            AdminPage::Categories => "categories",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "dashboard" => Some(AdminPage::Dashboard),
            "products" => Some(AdminPage::Products),
            "orders" => Some(AdminPage::Orders),
            "categories" => Some(AdminPage::Categories),
            _ => None,
        }
    }
}

/// Storefront pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Page {
    #[default]
    Home,
    ProductList(Listing),
    ProductDetail(ProductId),
    Cart,
    Checkout,
    OrderConfirmation,
    Static(StaticPage),
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Page::Home => write!(f, "home"),
            Page::ProductList(Listing::All) => write!(f, "products"),
            Page::ProductList(Listing::Category(id)) => write!(f, "products/category/{}", id),
            Page::ProductList(Listing::NewArrivals) => write!(f, "products/new"),
            Page::ProductDetail(id) => write!(f, "product/{}", id),
            Page::Cart => write!(f, "cart"),
            Page::Checkout => write!(f, "checkout"),
            Page::OrderConfirmation => write!(f, "order-confirmation"),
            Page::Static(page) => write!(f, "{}", page.as_str()),
        }
    }
}

/// Navigation state: the current page plus the overlays on top of it.
///
/// The admin console replaces the storefront while it is open; the
/// storefront page underneath is kept so closing the console returns to it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Navigation {
    pub page: Page,
    /// Open admin section, `None` when the storefront is showing.
    pub admin: Option<AdminPage>,
    /// Product shown in the quick-view overlay.
    pub quick_view: Option<ProductId>,
    /// Whether the track-order panel is open.
    pub track_order_open: bool,
}

impl Navigation {
    pub fn is_admin(&self) -> bool {
        self.admin.is_some()
    }

    pub(crate) fn go(&mut self, page: Page) {
        tracing::debug!(page = %page, "navigate");
        self.page = page;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use retrove_commerce::ids::CategoryId;

    #[test]
    fn test_static_page_parse() {
        for page in StaticPage::ALL {
            assert_eq!(StaticPage::from_str(page.as_str()), Some(page));
        }
        assert_eq!(StaticPage::from_str(" FAQ "), Some(StaticPage::Faq));
        assert_eq!(StaticPage::from_str("about"), None);
    }

    #[test]
    fn test_every_static_page_has_text() {
        for page in StaticPage::ALL {
            assert!(!page.body().is_empty(), "{} has no text", page.as_str());
        }
        assert!(StaticPage::Shipping.body()[0].contains("Rp25.000"));
    }

    #[test]
    fn test_page_display() {
        assert_eq!(Page::Home.to_string(), "home");
        assert_eq!(
            Page::ProductList(Listing::Category(CategoryId::new(3))).to_string(),
            "products/category/3"
        );
        assert_eq!(Page::ProductDetail(ProductId::new(12)).to_string(), "product/12");
    }

    #[test]
    fn test_default_navigation() {
        let nav = Navigation::default();
        assert_eq!(nav.page, Page::Home);
        assert!(!nav.is_admin());
        assert!(nav.quick_view.is_none());
    }
}
