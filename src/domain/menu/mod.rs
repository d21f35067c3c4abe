//! Static menu catalog

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MenuItem {
    pub name: &'static str,
    /// Price in rupees
    pub price: i64,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MenuCategory {
    pub name: &'static str,
    pub items: &'static [MenuItem],
}

const fn item(name: &'static str, price: i64, image: &'static str) -> MenuItem {
    MenuItem { name, price, image }
}

const PIZZA: &[MenuItem] = &[
    item("Margherita", 200, "margherita.jpg"),
    item("Pepperoni", 250, "pepperoni.jpg"),
    item("Paneer Tikka", 250, "paneer_tikka.jpg"),
    item("BBQ Chicken", 300, "bbq_chicken.jpg"),
    item("Peri Peri", 280, "peri_peri.jpg"),
    item("Cheese Burst", 320, "cheese_burst.jpg"),
    item("Mexican Green Wave", 290, "mexican_green_wave.jpg"),
    item("Farmhouse", 260, "farmhouse.jpg"),
    item("Veggie Delight", 240, "veggie_delight.jpg"),
    item("Tandoori Paneer", 270, "tandoori_paneer.jpg"),
];

const DRINKS: &[MenuItem] = &[
    item("Coke", 50, "coke.jpg"),
    item("Lemonade", 60, "lemonade.jpg"),
    item("Smoothies", 85, "smoothie.jpg"),
    item("Milkshake", 100, "milkshake.jpg"),
    item("Mojito", 80, "mojito.jpg"),
    item("Expresso", 90, "espresso.jpg"),
    item("Cold Coffee", 110, "cold_coffee.jpg"),
    item("Iced Tea", 70, "iced_tea.jpg"),
    item("Hot Chocolate", 95, "hot_chocolate.jpg"),
    item("Green Tea", 60, "green_tea.jpg"),
    item("Blue Lagoon", 130, "blue_lagoon.jpg"),
];

const ENTRADAS: &[MenuItem] = &[
    item("Nachos", 120, "nachos.jpg"),
    item("Spring Rolls", 150, "spring_rolls.jpg"),
    item("Cheese Balls", 130, "cheese_balls.jpg"),
    item("Garlic Bread", 100, "garlic_bread.jpg"),
    item("French Fries", 90, "french_fries.jpg"),
    item("Tomato Salad", 80, "tomato_salad.jpg"),
    item("Tandoori Momos", 140, "tandoori_momos.jpg"),
    item("Stuffed Mushroom", 160, "stuffed_mushrooms.jpg"),
    item("Loaded Nachos", 180, "loaded_nachos.jpg"),
    item("Bruschetta", 120, "bruschetta.jpg"),
];

pub const MENU: &[MenuCategory] = &[
    MenuCategory {
        name: "Pizza",
        items: PIZZA,
    },
    MenuCategory {
        name: "Drinks",
        items: DRINKS,
    },
    MenuCategory {
        name: "Entradas",
        items: ENTRADAS,
    },
];

pub fn find_item(name: &str) -> Option<&'static MenuItem> {
    MENU.iter()
        .flat_map(|c| c.items.iter())
        .find(|i| i.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_shape() {
        let names: Vec<_> = MENU.iter().map(|c| c.name).collect();
        assert_eq!(names, ["Pizza", "Drinks", "Entradas"]);
        assert_eq!(MENU.iter().map(|c| c.items.len()).sum::<usize>(), 31);
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(find_item("Coke").map(|i| i.price), Some(50));
        assert!(find_item("Sushi").is_none());
    }
}
