//! Clasificador de regiones: nombre libre de museo → `RegionCode`.
//!
//! Dos pasadas sobre una tabla ordenada de reglas. Primero se busca la
//! etiqueta de la propia región (`济南市`); si ninguna aparece, se buscan
//! los fragmentos de distritos/condados en orden declarado. El primer
//! acierto gana, así que un nombre con la etiqueta de una región y un
//! fragmento de otra queda en la primera.

use caitao_domain::RegionCode;

/// Regla de una región: su código y los fragmentos que la identifican.
#[derive(Debug, Clone, Copy)]
pub struct RegionRule {
    pub region: RegionCode,
    pub fragments: &'static [&'static str],
}

impl RegionRule {
    fn label_matches(&self, text: &str) -> bool {
        text.contains(self.region.label())
    }

    fn fragment_matches(&self, text: &str) -> bool {
        self.fragments.iter().any(|f| text.contains(f))
    }
}

/// Tabla de distritos y condados de Shandong, en el orden de `RegionCode::ALL`.
pub const REGION_TABLE: [RegionRule; 16] = [
    RegionRule { region: RegionCode::Jinan,
                 fragments: &["济南", "历下", "市中", "槐荫", "天桥", "历城", "长清", "章丘", "济阳", "莱芜", "钢城", "平阴", "商河"] },
    RegionRule { region: RegionCode::Qingdao,
                 fragments: &["青岛", "市南", "市北", "黄岛", "西海岸", "崂山", "李沧", "城阳", "即墨", "胶州", "平度", "莱西"] },
    RegionRule { region: RegionCode::Zibo,
                 fragments: &["淄博", "淄川", "张店", "博山", "临淄", "周村", "桓台", "高青", "沂源"] },
    RegionRule { region: RegionCode::Zaozhuang,
                 fragments: &["枣庄", "薛城", "峄城", "台儿庄", "山亭", "滕州"] },
    RegionRule { region: RegionCode::Dongying,
                 fragments: &["东营", "河口", "垦利", "利津", "广饶"] },
    RegionRule { region: RegionCode::Yantai,
                 fragments: &["烟台", "芝罘", "福山", "牟平", "莱山", "蓬莱", "龙口", "莱阳", "莱州", "招远", "栖霞", "海阳", "长岛"] },
    RegionRule { region: RegionCode::Weifang,
                 fragments: &["潍坊", "潍城", "寒亭", "坊子", "奎文", "青州", "诸城", "寿光", "安丘", "高密", "昌邑", "临朐", "昌乐"] },
    RegionRule { region: RegionCode::Jining,
                 fragments: &["济宁", "任城", "兖州", "曲阜", "邹城", "微山", "鱼台", "金乡", "嘉祥", "汶上", "泗水", "梁山"] },
    RegionRule { region: RegionCode::Taian,
                 fragments: &["泰安", "泰山", "岱岳", "新泰", "肥城", "宁阳", "东平"] },
    RegionRule { region: RegionCode::Weihai,
                 fragments: &["威海", "环翠", "文登", "荣成", "乳山"] },
    RegionRule { region: RegionCode::Rizhao,
                 fragments: &["日照", "东港", "岚山", "五莲", "莒县"] },
    RegionRule { region: RegionCode::Linyi,
                 fragments: &["临沂", "兰山", "河东", "罗庄", "沂南", "郯城", "沂水", "兰陵", "费县", "平邑", "莒南", "蒙阴", "临沭", "银雀山"] },
    RegionRule { region: RegionCode::Dezhou,
                 fragments: &["德州", "德城", "陵城", "陵县", "乐陵", "禹城", "宁津", "庆云", "临邑", "齐河", "平原", "夏津", "武城"] },
    RegionRule { region: RegionCode::Liaocheng,
                 fragments: &["聊城", "东昌府", "茌平", "临清", "阳谷", "莘县", "东阿", "冠县", "高唐"] },
    RegionRule { region: RegionCode::Binzhou,
                 fragments: &["滨州", "滨城", "沾化", "邹平", "惠民", "阳信", "无棣", "博兴"] },
    RegionRule { region: RegionCode::Heze,
                 fragments: &["菏泽", "牡丹", "定陶", "曹县", "单县", "成武", "巨野", "郓城", "鄄城", "东明"] },
];

/// Clasificador sobre una lista ordenada de reglas.
#[derive(Debug, Clone, Copy)]
pub struct RegionClassifier<'a> {
    rules: &'a [RegionRule],
}

impl Default for RegionClassifier<'static> {
    fn default() -> Self {
        Self { rules: &REGION_TABLE }
    }
}

impl<'a> RegionClassifier<'a> {
    pub fn new(rules: &'a [RegionRule]) -> Self {
        Self { rules }
    }

    /// Total: un nombre ausente o sin coincidencias cae en `RegionCode::Other`.
    pub fn classify(&self, museum_name: Option<&str>) -> RegionCode {
        let Some(text) = museum_name else {
            return RegionCode::Other;
        };
        self.rules
            .iter()
            .find(|r| r.label_matches(text))
            .or_else(|| self.rules.iter().find(|r| r.fragment_matches(text)))
            .map(|r| r.region)
            .unwrap_or(RegionCode::Other)
    }
}

/// Atajo con la tabla por defecto.
pub fn classify_region(museum_name: Option<&str>) -> RegionCode {
    RegionClassifier::default().classify(museum_name)
}
