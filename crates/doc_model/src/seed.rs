//! Sample work order shown when the form first loads

use crate::{DetailId, ItemId, WorkOrder, WorkOrderDetail, WorkOrderItem};

impl WorkOrder {
    /// Two reactive-dyeing twill items with 2 and 3 colour rows (8,255 yds in total)
    pub fn sample() -> Self {
        let first = ItemId::from("1");
        let second = ItemId::from("2");

        WorkOrder::with_items(vec![
            WorkOrderItem::new(first.clone(), 1)
                .with_fabric_description("16x10/112x56 Twill")
                .with_f_width_inch("57/58")
                .with_quality("N/P")
                .with_nature_of_work("Reactive Dyeing")
                .with_details(vec![
                    detail(&first, 1, "Black", 3000, "BDT.43.00 Tk.", "No"),
                    detail(&first, 2, "Khaki", 2100, "BDT.38.00 Tk.", "Yes"),
                ]),
            WorkOrderItem::new(second.clone(), 2)
                .with_fabric_description("20x20/108x58 Twill")
                .with_f_width_inch("57/58")
                .with_quality("N/P")
                .with_nature_of_work("Reactive Dyeing")
                .with_details(vec![
                    detail(&second, 1, "Khaki", 1155, "", "Yes"),
                    detail(&second, 2, "Burgundy", 1000, "BDT.40.00 Tk.", "\""),
                    detail(&second, 3, "Brown", 1000, "", "\""),
                ]),
        ])
    }
}

fn detail(item: &ItemId, seq: u64, colour: &str, qty: u64, rate: &str, swatch: &str) -> WorkOrderDetail {
    WorkOrderDetail::new(DetailId::for_item(item, seq))
        .with_colour(colour)
        .with_qty(qty)
        .with_rate(rate)
        .with_swatch(swatch)
}
