use combinations::Combinations;

fn viz(n: usize, indices: &[usize]) -> String {
    let mut ret = String::new();
    for idx in 0..n {
        ret.push(if indices.contains(&idx) { '#' } else { '.' });
    }
    ret
}

fn main() {
    let n = 6;
    let r = 3;
    let positions = (0..n).collect::<Vec<usize>>();
    for (k, indices) in Combinations::new(&positions, r).unwrap().enumerate() {
        println!("{:>3} {} {:?}", k + 1, viz(n, &indices), indices);
    }
    println!("C({n},{r}) = {:?}", combinations::binomial(n as u64, r as u64));
}
