//! Mock data the storefront starts from.
//!
//! Ten hand-written products, ninety generated ones, six categories and
//! four historical orders. Generated products come from a seeded RNG, so
//! the same seed always yields the same catalog.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use retrove_commerce::catalog::{Catalog, Category, Product, Review};
use retrove_commerce::checkout::{Order, OrderBook, OrderStatus};
use retrove_commerce::ids::{CategoryId, OrderId, ProductId, ReviewId};
use retrove_commerce::{Currency, Money};

/// Number of generated products following the hand-written ones.
pub const GENERATED_PRODUCTS: u64 = 90;

const JAKET: CategoryId = CategoryId::new(1);
const KEMEJA: CategoryId = CategoryId::new(2);
const CELANA: CategoryId = CategoryId::new(3);
const SWEATER: CategoryId = CategoryId::new(4);
const ROK: CategoryId = CategoryId::new(5);
const AKSESORI: CategoryId = CategoryId::new(6);

/// The starting categories.
pub fn categories() -> Vec<Category> {
    vec![
        Category::new(JAKET, "Jaket", "https://picsum.photos/seed/jackets/500"),
        Category::new(KEMEJA, "Kemeja", "https://picsum.photos/seed/shirts/500"),
        Category::new(CELANA, "Celana", "https://picsum.photos/seed/pants/500"),
        Category::new(SWEATER, "Sweater", "https://picsum.photos/seed/sweaters/500"),
        Category::new(ROK, "Rok", "https://picsum.photos/seed/skirts/500"),
        Category::new(AKSESORI, "Aksesori", "https://picsum.photos/seed/accessories/500"),
    ]
}

/// The seeded reviews.
pub fn reviews() -> Vec<Review> {
    vec![
        review(
            1,
            "Budi Santoso",
            "12 April 2024",
            5,
            "Jaketnya keren banget, kondisinya masih seperti baru. Pengiriman juga cepat. Recommended!",
        ),
        review(
            2,
            "Citra Lestari",
            "10 April 2024",
            4,
            "Warnanya sedikit beda dari foto, tapi bahannya bagus dan ukurannya pas. Overall puas.",
        ),
        review(
            3,
            "Agus Wijaya",
            "5 April 2024",
            5,
            "Barang langka, akhirnya nemu di sini. Terima kasih Retrove!",
        ),
    ]
}

fn review(id: u64, author: &str, date: &str, rating: u8, comment: &str) -> Review {
    Review {
        id: ReviewId::new(id),
        author: author.to_string(),
        date: date.to_string(),
        rating,
        comment: comment.to_string(),
    }
}

/// Fields of a hand-written product.
struct Piece {
    id: u64,
    name: &'static str,
    description: &'static str,
    price: i64,
    images: &'static [&'static str],
    category: CategoryId,
    size: &'static str,
    size_details: Option<&'static str>,
    material: &'static str,
    condition: &'static str,
    in_stock: bool,
    rating: f32,
}

impl Piece {
    fn into_product(self, currency: Currency, reviews: Vec<Review>) -> Product {
        Product {
            id: ProductId::new(self.id),
            name: self.name.to_string(),
            description: self.description.to_string(),
            price: Money::new(self.price, currency),
            images: self.images.iter().map(|s| s.to_string()).collect(),
            category_id: Some(self.category),
            size: self.size.to_string(),
            size_details: self.size_details.map(str::to_string),
            material: self.material.to_string(),
            condition: self.condition.to_string(),
            in_stock: self.in_stock,
            rating: self.rating,
            reviews,
        }
    }
}

fn featured_products(currency: Currency) -> Vec<Product> {
    let reviews = reviews();
    let pieces = [
        Piece {
            id: 1,
            name: "Jaket Denim Levis Vintage",
            description: "Jaket denim klasik dari Levis era 90-an. Warna biru medium wash dengan sedikit efek pudar alami yang keren. Cocok untuk gaya kasual sehari-hari.",
            price: 450_000,
            images: &[
                "https://picsum.photos/seed/levis1/800",
                "https://picsum.photos/seed/levis2/800",
                "https://picsum.photos/seed/levis3/800",
            ],
            category: JAKET,
            size: "L",
            size_details: Some("P 68cm, L 55cm"),
            material: "Denim",
            condition: "9.5/10 - Excellent",
            in_stock: true,
            rating: 4.8,
        },
        Piece {
            id: 2,
            name: "Kemeja Flanel Kotak-Kotak",
            description: "Kemeja flanel tebal dengan motif kotak-kotak klasik warna merah dan hitam. Hangat dan nyaman, cocok untuk cuaca dingin atau sebagai outer.",
            price: 220_000,
            images: &[
                "https://picsum.photos/seed/flanel1/800",
                "https://picsum.photos/seed/flanel2/800",
            ],
            category: KEMEJA,
            size: "M",
            size_details: None,
            material: "Flanel Katun",
            condition: "9/10 - Great",
            in_stock: true,
            rating: 4.5,
        },
        Piece {
            id: 3,
            name: "Celana Kargo Army",
            description: "Celana kargo bergaya militer dengan banyak kantong. Bahan ripstop yang kuat dan tahan lama. Warna hijau army yang otentik.",
            price: 350_000,
            images: &[
                "https://picsum.photos/seed/kargo1/800",
                "https://picsum.photos/seed/kargo2/800",
            ],
            category: CELANA,
            size: "32",
            size_details: Some("Lingkar Pinggang 82cm"),
            material: "Cotton Ripstop",
            condition: "8.5/10 - Very Good",
            in_stock: false,
            rating: 4.2,
        },
        Piece {
            id: 4,
            name: "Topi Baseball Polo Sport",
            description: "Topi baseball vintage dari Polo Sport Ralph Lauren. Warna navy dengan logo bordir di bagian depan. Kondisi masih sangat baik.",
            price: 180_000,
            images: &["https://picsum.photos/seed/polohat/800"],
            category: AKSESORI,
            size: "One Size",
            size_details: None,
            material: "Katun",
            condition: "9/10 - Great",
            in_stock: true,
            rating: 0.0,
        },
        Piece {
            id: 5,
            name: "Jaket Harrington Merah",
            description: "Jaket Harrington klasik berwarna merah cerah. Desain ikonik dengan lapisan dalam motif tartan. Sempurna untuk gaya smart-casual.",
            price: 380_000,
            images: &[
                "https://picsum.photos/seed/harrington1/800",
                "https://picsum.photos/seed/harrington2/800",
            ],
            category: JAKET,
            size: "M",
            size_details: None,
            material: "Katun Drill",
            condition: "9/10 - Great",
            in_stock: true,
            rating: 4.6,
        },
        Piece {
            id: 6,
            name: "Kemeja Hawaii Vintage",
            description: "Kemeja lengan pendek dengan motif floral khas Hawaii. Warna dasar biru dengan bunga-bunga tropis. Bahan rayon yang adem dan jatuh.",
            price: 200_000,
            images: &[
                "https://picsum.photos/seed/hawaii1/800",
                "https://picsum.photos/seed/hawaii2/800",
            ],
            category: KEMEJA,
            size: "XL",
            size_details: None,
            material: "Rayon",
            condition: "8/10 - Good",
            in_stock: true,
            rating: 4.0,
        },
        Piece {
            id: 7,
            name: "Celana Chino Coklat",
            description: "Celana chino klasik warna coklat khaki. Potongan slim-fit yang modern. Bahan katun twill yang nyaman untuk dipakai seharian.",
            price: 250_000,
            images: &[
                "https://picsum.photos/seed/chino1/800",
                "https://picsum.photos/seed/chino2/800",
            ],
            category: CELANA,
            size: "30",
            size_details: None,
            material: "Katun Twill",
            condition: "9.5/10 - Excellent",
            in_stock: true,
            rating: 0.0,
        },
        Piece {
            id: 8,
            name: "Tas Selempang Kulit",
            description: "Tas selempang dari kulit asli yang sudah menua dengan indah. Ukuran medium, cukup untuk membawa barang esensial. Desain timeless.",
            price: 550_000,
            images: &["https://picsum.photos/seed/leathertas/800"],
            category: AKSESORI,
            size: "Medium",
            size_details: None,
            material: "Kulit Asli",
            condition: "8.5/10 - Very Good, with patina",
            in_stock: true,
            rating: 5.0,
        },
        Piece {
            id: 9,
            name: "Jaket Windbreaker 80s",
            description: "Jaket windbreaker dengan color-blocking khas tahun 80an. Warna ungu, tosca, dan pink yang mencolok. Ringan dan cocok untuk layering.",
            price: 320_000,
            images: &[
                "https://picsum.photos/seed/windbreaker1/800",
                "https://picsum.photos/seed/windbreaker2/800",
            ],
            category: JAKET,
            size: "L",
            size_details: None,
            material: "Nylon",
            condition: "8/10 - Good",
            in_stock: true,
            rating: 4.3,
        },
        Piece {
            id: 10,
            name: "Kemeja Chambray Biru Muda",
            description: "Kemeja lengan panjang bahan chambray yang ringan dan adem. Warna biru muda yang versatile, mudah dipadupadankan.",
            price: 210_000,
            images: &[
                "https://picsum.photos/seed/chambray1/800",
                "https://picsum.photos/seed/chambray2/800",
            ],
            category: KEMEJA,
            size: "S",
            size_details: None,
            material: "Chambray",
            condition: "9/10 - Great",
            in_stock: false,
            rating: 4.7,
        },
    ];

    pieces
        .into_iter()
        .map(|piece| {
            let attached = match piece.id {
                1 => vec![reviews[0].clone(), reviews[1].clone()],
                2 => vec![reviews[2].clone()],
                _ => Vec::new(),
            };
            piece.into_product(currency, attached)
        })
        .collect()
}

/// Garment types per category, used by the generator.
const GENERATED_CATEGORIES: [(CategoryId, &[&str]); 6] = [
    (JAKET, &["Bomber", "Varsity", "Denim", "Windbreaker"]),
    (KEMEJA, &["Flanel", "Chambray", "Hawaii", "Lengan Panjang"]),
    (CELANA, &["Jeans", "Kargo", "Chino", "Corduroy"]),
    (AKSESORI, &["Topi", "Tas Selempang", "Ikat Pinggang"]),
    (SWEATER, &["Crewneck", "Hoodie", "Rajut"]),
    (ROK, &["Mini Denim", "Midi Plisket", "Maxi Floral"]),
];

const BRANDS: &[&str] = &[
    "Adidas",
    "Nike",
    "Champion",
    "Fila",
    "Uniqlo",
    "Levis",
    "Polo Ralph Lauren",
    "Tommy Hilfiger",
    "Zara",
    "Stussy",
];
const ADJECTIVES: &[&str] = &["Vintage", "Retro", "Oversized", "Klasik", "Langka", "90an", "80an", "Y2K"];
const COLORS: &[&str] = &[
    "Merah",
    "Biru Tua",
    "Hijau Army",
    "Hitam Pekat",
    "Putih Gading",
    "Abu-abu",
    "Coklat Karamel",
    "Ungu",
];
const MATERIALS: &[&str] = &["Katun", "Denim", "Wol", "Kulit Sintetis", "Nilon", "Polyester", "Rayon", "Corduroy"];
const SIZES: &[&str] = &["S", "M", "L", "XL", "One Size", "28", "30", "32", "34", "36"];
const CONDITIONS: &[&str] = &[
    "10/10 - Mint",
    "9.5/10 - Excellent",
    "9/10 - Great",
    "8.5/10 - Very Good",
    "8/10 - Good",
    "7.5/10 - Decent",
];

fn pick<'a, T>(rng: &mut StdRng, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

fn generated_product(rng: &mut StdRng, id: u64, currency: Currency) -> Product {
    let (category, types) = *pick(rng, &GENERATED_CATEGORIES);
    let kind = *pick(rng, types);
    let brand = *pick(rng, BRANDS);
    let adjective = *pick(rng, ADJECTIVES);
    let color = *pick(rng, COLORS);

    let description = format!(
        "Sebuah item {} yang otentik, {} {} berwarna {}. Dibuat dengan bahan berkualitas tinggi, \
         item ini menawarkan gaya dan kenyamanan. Sempurna untuk melengkapi koleksi fashion \
         berkelanjutan Anda. Item unik ini hanya ada satu, jadi jangan sampai ketinggalan.",
        adjective.to_lowercase(),
        kind.to_lowercase(),
        brand.to_lowercase(),
        color.to_lowercase()
    );

    // 150k to 750k in steps of 10k.
    let price = rng.gen_range(15..=75) * 10_000;
    let rating = (rng.gen_range(3.8_f32..5.0) * 10.0).round() / 10.0;

    Product {
        id: ProductId::new(id),
        name: format!("{} {} {} {}", kind, brand, adjective, color),
        description,
        price: Money::new(price, currency),
        images: ["a", "b", "c"]
            .iter()
            .map(|suffix| format!("https://picsum.photos/seed/{}-{}/800", id, suffix))
            .collect(),
        category_id: Some(category),
        size: pick(rng, SIZES).to_string(),
        size_details: None,
        material: pick(rng, MATERIALS).to_string(),
        condition: pick(rng, CONDITIONS).to_string(),
        in_stock: rng.gen::<f64>() > 0.15,
        rating,
        reviews: Vec::new(),
    }
}

/// All seed products: the hand-written ten followed by the generated ones.
pub fn products(seed: u64, currency: Currency) -> Vec<Product> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut products = featured_products(currency);
    let first_generated = products.len() as u64 + 1;
    products.extend(
        (first_generated..first_generated + GENERATED_PRODUCTS)
            .map(|id| generated_product(&mut rng, id, currency)),
    );
    products
}

/// The historical orders.
///
/// Totals are kept as recorded, so they do not all include shipping.
pub fn orders(products: &[Product], currency: Currency) -> OrderBook {
    let snapshot = |id: u64| -> Vec<Product> {
        products
            .iter()
            .filter(|p| p.id == ProductId::new(id))
            .cloned()
            .collect()
    };

    let history = [
        ("RTV-1001", "Dewi Anggraini", "dewi@example.com", "Jl. Merdeka No. 17, Jakarta", (2024, 5, 20), 670_000, OrderStatus::Shipped, vec![1, 2]),
        ("RTV-1002", "Eko Prasetyo", "eko@example.com", "Jl. Sudirman No. 22, Bandung", (2024, 5, 19), 205_000, OrderStatus::Delivered, vec![4]),
        ("RTV-1003", "Fitriani", "fitri@example.com", "Jl. Gajah Mada No. 8, Surabaya", (2024, 5, 21), 405_000, OrderStatus::Paid, vec![5]),
        ("RTV-1004", "Galih Nugroho", "galih@example.com", "Jl. Pahlawan No. 45, Semarang", (2024, 5, 22), 225_000, OrderStatus::Pending, vec![6]),
    ];

    OrderBook::new(
        history
            .into_iter()
            .filter_map(|(id, name, email, address, (y, m, d), total, status, items)| {
                Some(Order {
                    id: OrderId::new(id),
                    customer_name: name.to_string(),
                    email: email.to_string(),
                    address: address.to_string(),
                    date: NaiveDate::from_ymd_opt(y, m, d)?,
                    total: Money::new(total, currency),
                    status,
                    items: items.into_iter().flat_map(snapshot).collect(),
                })
            })
            .collect(),
    )
}

/// Seed catalog and order history.
pub fn seed(seed: u64, currency: Currency) -> (Catalog, OrderBook) {
    let products = products(seed, currency);
    let orders = orders(&products, currency);
    (Catalog::new(products, categories()), orders)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_shape() {
        let (catalog, orders) = seed(7, Currency::IDR);
        assert_eq!(catalog.products().len(), 100);
        assert_eq!(catalog.categories().len(), 6);
        assert_eq!(orders.len(), 4);

        let ids: Vec<u64> = catalog.products().iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, (1..=100).collect::<Vec<_>>());
    }

    #[test]
    fn test_generation_is_deterministic() {
        assert_eq!(products(42, Currency::IDR), products(42, Currency::IDR));
        assert_ne!(products(42, Currency::IDR), products(43, Currency::IDR));
    }

    #[test]
    fn test_generated_ranges() {
        for product in products(99, Currency::IDR).iter().skip(10) {
            assert!((150_000..=750_000).contains(&product.price.amount));
            assert_eq!(product.price.amount % 10_000, 0);
            assert!((3.8..=5.0).contains(&product.rating));
            assert_eq!(product.images.len(), 3);
            assert!(product.category_id.is_some());
        }
    }

    #[test]
    fn test_featured_products() {
        let products = products(1, Currency::IDR);
        assert_eq!(products[0].name, "Jaket Denim Levis Vintage");
        assert_eq!(products[0].reviews.len(), 2);
        assert!(!products[2].in_stock);
        assert_eq!(products[3].category_id, Some(AKSESORI));
    }

    #[test]
    fn test_historical_orders() {
        let (_, orders) = seed(1, Currency::IDR);
        let first = orders.get(&OrderId::new("RTV-1001")).unwrap();
        assert_eq!(first.items.len(), 2);
        assert_eq!(first.total, Money::idr(670_000));
        assert_eq!(first.status, OrderStatus::Shipped);
        assert_eq!(orders.next_id("RTV", 1001), OrderId::new("RTV-1005"));
    }
}
